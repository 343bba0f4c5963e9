//! Magnetometer Data Processing
//!
//! The FXOS8700Q's magnetometer measures the magnetic field along three axes:
//! - X
//! - Y
//! - Z
//!
//! Each axis is a 16-bit two's-complement count in big-endian byte order,
//! with a fixed sensitivity of 0.1 µT per count.

/// Microtesla per count.
pub const UT_PER_COUNT: f32 = 0.1;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "postcard-experimental", derive(postcard::experimental::max_size::MaxSize))]
pub struct Mag {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Mag {
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Converts raw sensor bytes into magnetometer counts.
    ///
    /// - 2 bytes per axis in big-endian byte order
    /// - Signed integers, no sign extension needed
    pub const fn from_bytes(data: [u8; 6]) -> Self {
        let x = [data[0], data[1]];
        let y = [data[2], data[3]];
        let z = [data[4], data[5]];
        Self {
            x: i16::from_be_bytes(x),
            y: i16::from_be_bytes(y),
            z: i16::from_be_bytes(z),
        }
    }

    pub const fn to_bytes(&self) -> [u8; 6] {
        let x = self.x.to_be_bytes();
        let y = self.y.to_be_bytes();
        let z = self.z.to_be_bytes();
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

    pub fn microtesla(&self) -> MagF32 {
        MagF32 {
            x: count_to_ut(self.x),
            y: count_to_ut(self.y),
            z: count_to_ut(self.z),
        }
    }
}

pub(crate) fn count_to_ut(value: i16) -> f32 {
    (value as f32) * UT_PER_COUNT
}

/// Magnetic field in µT.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagF32 {
    x: f32,
    y: f32,
    z: f32,
}

impl MagF32 {
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }
}
