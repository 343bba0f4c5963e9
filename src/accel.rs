//! Accelerometer Data Processing
//!
//! The FXOS8700Q accelerometer outputs 14-bit two's-complement counts,
//! left-justified in a big-endian register pair:
//!
//! ```text
//!  MSB register: D13 D12 D11 D10 D9 D8 D7 D6
//!  LSB register: D5  D4  D3  D2  D1 D0 -  -
//! ```

/// Counts in a full 14-bit range.
const RANGE_14_BIT: i16 = 1 << 14;
/// Largest positive 14-bit count.
const MAX_14_BIT: i16 = (RANGE_14_BIT / 2) - 1;

/// Centi-g per g; the calibration engine and motion detector work in centi-g.
pub const CENTI_G_PER_G: f32 = 100.0;

/// Decodes one left-justified 14-bit count from its register pair.
pub const fn decode_14_bit(msb: u8, lsb: u8) -> i16 {
    let raw = ((msb as i16) << 6) | ((lsb as i16) >> 2);
    if raw > MAX_14_BIT {
        raw - RANGE_14_BIT
    } else {
        raw
    }
}

/// Inverse of [`decode_14_bit`]. Values outside [-8192, 8191] wrap.
pub const fn encode_14_bit(value: i16) -> [u8; 2] {
    let raw = (value as u16) & 0x3FFF;
    [(raw >> 6) as u8, ((raw & 0x3F) << 2) as u8]
}

/// Raw acceleration readings vector, in counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "postcard-experimental", derive(postcard::experimental::max_size::MaxSize))]
pub struct Accel {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Accel {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    pub const fn from_bytes(data: [u8; 6]) -> Self {
        Self {
            x: decode_14_bit(data[0], data[1]),
            y: decode_14_bit(data[2], data[3]),
            z: decode_14_bit(data[4], data[5]),
        }
    }

    pub const fn to_bytes(&self) -> [u8; 6] {
        let x = encode_14_bit(self.x);
        let y = encode_14_bit(self.y);
        let z = encode_14_bit(self.z);
        [x[0], x[1], y[0], y[1], z[0], z[1]]
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    pub fn scaled(&self, scale: AccelFullScale) -> AccelF32 {
        AccelF32 {
            x: scale.scale_value(self.x),
            y: scale.scale_value(self.y),
            z: scale.scale_value(self.z),
        }
    }
}

/// Accelerometer range, bits fs[1:0] of XYZ_DATA_CFG.
///
/// The driver always configures [`AccelFullScale::G2`].
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum AccelFullScale {
    G2 = 0,
    G4 = 1,
    G8 = 2,
}

impl AccelFullScale {
    /// Counts per g.
    pub const fn scale(self) -> f32 {
        match self {
            Self::G2 => 4096.0,
            Self::G4 => 2048.0,
            Self::G8 => 1024.0,
        }
    }

    pub fn scale_value(self, value: i16) -> f32 {
        (value as f32) / self.scale()
    }
}

/// Acceleration vector in floating point.
///
/// Holds g when produced by [`Accel::scaled`], centi-g after
/// [`AccelF32::to_centi_g`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccelF32 {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) z: f32,
}

impl AccelF32 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }

    pub fn to_centi_g(self) -> Self {
        Self {
            x: self.x * CENTI_G_PER_G,
            y: self.y * CENTI_G_PER_G,
            z: self.z * CENTI_G_PER_G,
        }
    }
}

/// Per-axis difference, used to apply calibration offsets.
impl core::ops::Sub for AccelF32 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_14_bit_round_trips_full_range() {
        for value in -8192i16..=8191 {
            let [msb, lsb] = encode_14_bit(value);
            assert_eq!(decode_14_bit(msb, lsb), value, "value {value}");
        }
    }

    #[test]
    fn decode_14_bit_matches_arithmetic_shift() {
        for msb in 0..=u8::MAX {
            for lsb in (0..=u8::MAX).step_by(4) {
                let expected = i16::from_be_bytes([msb, lsb]) >> 2;
                assert_eq!(decode_14_bit(msb, lsb), expected);
            }
        }
    }

    #[test]
    fn decode_14_bit_ignores_unused_low_bits() {
        assert_eq!(decode_14_bit(0x10, 0x03), 0x400);
        assert_eq!(decode_14_bit(0xFF, 0xFF), -1);
    }

    #[test]
    fn decode_known_extremes() {
        assert_eq!(decode_14_bit(0x7F, 0xFC), 8191);
        assert_eq!(decode_14_bit(0x80, 0x00), -8192);
        assert_eq!(decode_14_bit(0x00, 0x04), 1);
    }

    #[test]
    fn one_g_on_z_scales_to_one() {
        let accel = Accel::from_bytes([0x00, 0x00, 0x00, 0x00, 0x40, 0x00]);
        assert_eq!(accel, Accel::new(0, 0, 4096));
        let g = accel.scaled(AccelFullScale::G2);
        assert_eq!(g, AccelF32::new(0.0, 0.0, 1.0));
        assert_eq!(g.to_centi_g(), AccelF32::new(0.0, 0.0, 100.0));
    }

    #[test]
    fn to_bytes_is_inverse_of_from_bytes() {
        let accel = Accel::new(-8192, 123, 8191);
        assert_eq!(Accel::from_bytes(accel.to_bytes()), accel);
    }
}
