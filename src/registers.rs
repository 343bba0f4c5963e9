//! FXOS8700Q Register Map
//!
//! Only the registers the driver touches are listed. They fall in three groups:
//! - Status and identification registers
//! - Accelerometer and magnetometer output registers (MSB first)
//! - Control registers written by the init sequence
//!
//! The device also exposes FIFO, transient, pulse and vector-magnitude
//! detection blocks; this driver does its motion detection in software and
//! leaves those blocks at their reset values.

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Register {
    /// Accelerometer data status register (0x00)
    Status = 0x00,

    // Accelerometer Data Registers (14-bit, left-justified)
    /// High byte of X-axis acceleration
    OutX_MSB = 0x01,
    /// Low byte of X-axis acceleration
    OutX_LSB = 0x02,
    /// High byte of Y-axis acceleration
    OutY_MSB = 0x03,
    /// Low byte of Y-axis acceleration
    OutY_LSB = 0x04,
    /// High byte of Z-axis acceleration
    OutZ_MSB = 0x05,
    /// Low byte of Z-axis acceleration
    OutZ_LSB = 0x06,

    /// Device identification register (0x0D), reads 0xC7
    WhoAmI = 0x0D,

    /// Accelerometer full-scale range and high-pass output selection (0x0E)
    XyzDataCfg = 0x0E,

    /// System control register 1 (0x2A)
    /// Holds the output data rate and the ACTIVE bit
    CtrlReg1 = 0x2A,

    /// Magnetometer data status register (0x32)
    MDrStatus = 0x32,

    // Magnetometer Data Registers (16-bit)
    /// High byte of X-axis magnetic field
    MOutX_MSB = 0x33,
    /// Low byte of X-axis magnetic field
    MOutX_LSB = 0x34,
    /// High byte of Y-axis magnetic field
    MOutY_MSB = 0x35,
    /// Low byte of Y-axis magnetic field
    MOutY_LSB = 0x36,
    /// High byte of Z-axis magnetic field
    MOutZ_MSB = 0x37,
    /// Low byte of Z-axis magnetic field
    MOutZ_LSB = 0x38,

    /// Magnetometer control register 1 (0x5B)
    /// Selects hybrid mode and oversampling
    MCtrlReg1 = 0x5B,

    /// Magnetometer control register 2 (0x5C)
    /// Enables hybrid auto-increment across accel and mag outputs
    MCtrlReg2 = 0x5C,
}

impl Register {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Status => "STATUS",
            Self::OutX_MSB => "OUT_X_MSB",
            Self::OutX_LSB => "OUT_X_LSB",
            Self::OutY_MSB => "OUT_Y_MSB",
            Self::OutY_LSB => "OUT_Y_LSB",
            Self::OutZ_MSB => "OUT_Z_MSB",
            Self::OutZ_LSB => "OUT_Z_LSB",
            Self::WhoAmI => "WHO_AM_I",
            Self::XyzDataCfg => "XYZ_DATA_CFG",
            Self::CtrlReg1 => "CTRL_REG1",
            Self::MDrStatus => "M_DR_STATUS",
            Self::MOutX_MSB => "M_OUT_X_MSB",
            Self::MOutX_LSB => "M_OUT_X_LSB",
            Self::MOutY_MSB => "M_OUT_Y_MSB",
            Self::MOutY_LSB => "M_OUT_Y_LSB",
            Self::MOutZ_MSB => "M_OUT_Z_MSB",
            Self::MOutZ_LSB => "M_OUT_Z_LSB",
            Self::MCtrlReg1 => "M_CTRL_REG1",
            Self::MCtrlReg2 => "M_CTRL_REG2",
        }
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}

/// Value of [`Register::WhoAmI`] on a genuine FXOS8700.
pub const WHO_AM_I_VALUE: u8 = 0xC7;

/// ACTIVE bit of [`Register::CtrlReg1`]: 0 = standby, 1 = active.
pub const CTRL_REG1_ACTIVE: u8 = 1 << 0;

/// One axis of the device, used to pick the MSB output register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub(crate) const fn accel_msb(self) -> Register {
        match self {
            Self::X => Register::OutX_MSB,
            Self::Y => Register::OutY_MSB,
            Self::Z => Register::OutZ_MSB,
        }
    }

    pub(crate) const fn mag_msb(self) -> Register {
        match self {
            Self::X => Register::MOutX_MSB,
            Self::Y => Register::MOutY_MSB,
            Self::Z => Register::MOutZ_MSB,
        }
    }
}
