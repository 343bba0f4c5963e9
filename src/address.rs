//! FXOS8700Q I2C Address Configuration
//!
//! The FXOS8700Q answers on one of four 7-bit addresses, selected by the
//! SA1 and SA0 pins:
//! - 0x1E (SA1 = 0, SA0 = 0, default)
//! - 0x1D (SA1 = 0, SA0 = 1)
//! - 0x1C (SA1 = 1, SA0 = 0)
//! - 0x1F (SA1 = 1, SA0 = 1)
//!
//! Both the accelerometer and the magnetometer live behind the same address;
//! they are told apart only by the register ranges they use.

/// Represents an FXOS8700Q I2C address.
///
/// Note: These are 7-bit addresses. Some I2C implementations may
/// require left-shifting by 1 to create the 8-bit address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Address(pub u8);

impl Address {
    /// SA1 = 0, SA0 = 1
    pub const SA0_HIGH: Self = Self(0x1D);
    /// SA1 = 1, SA0 = 0
    pub const SA1_HIGH: Self = Self(0x1C);
    /// SA1 = 1, SA0 = 1
    pub const BOTH_HIGH: Self = Self(0x1F);
}

impl Default for Address {
    /// Returns the default I2C address (0x1E), with both SA pins tied low.
    fn default() -> Self {
        Self(0x1E)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}
