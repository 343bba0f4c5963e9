/// Decoded data-ready status byte (STATUS for the accelerometer,
/// M_DR_STATUS for the magnetometer; both share this layout).
///
/// Bit mapping:
/// - Bit 7: ZYXOW, previous X, Y or Z sample overwritten before read
/// - Bit 6-4: Z, Y, X overwrite
/// - Bit 3: ZYXDR, new X, Y or Z sample available
/// - Bit 2-0: Z, Y, X data ready
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataStatus {
    pub zyx_overwrite: bool,
    pub z_overwrite: bool,
    pub y_overwrite: bool,
    pub x_overwrite: bool,
    pub zyx_ready: bool,
    pub z_ready: bool,
    pub y_ready: bool,
    pub x_ready: bool,
}

impl DataStatus {
    pub fn from_byte(byte: u8) -> Self {
        Self {
            zyx_overwrite: (byte & 0b1000_0000) != 0,
            z_overwrite: (byte & 0b0100_0000) != 0,
            y_overwrite: (byte & 0b0010_0000) != 0,
            x_overwrite: (byte & 0b0001_0000) != 0,
            zyx_ready: (byte & 0b0000_1000) != 0,
            z_ready: (byte & 0b0000_0100) != 0,
            y_ready: (byte & 0b0000_0010) != 0,
            x_ready: (byte & 0b0000_0001) != 0,
        }
    }

    /// True when a complete new sample is waiting.
    pub fn is_ready(&self) -> bool {
        self.zyx_ready
    }
}

impl From<u8> for DataStatus {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::DataStatus;

    #[test]
    fn ready_and_overwrite_bits() {
        let status = DataStatus::from_byte(0b1000_1001);
        assert!(status.zyx_overwrite);
        assert!(status.is_ready());
        assert!(status.x_ready);
        assert!(!status.y_ready);
        assert!(!status.z_overwrite);
        assert_eq!(DataStatus::from(0), DataStatus::default());
    }
}
