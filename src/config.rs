//! FXOS8700Q Startup Configuration
//!
//! The device is brought up in hybrid mode, where the accelerometer and the
//! magnetometer sample alternately:
//! - Output data rate 100 Hz, i.e. 50 Hz per sensor in hybrid mode
//! - Maximum magnetometer oversampling
//! - Accelerometer range ±2 g
//!
//! The configuration is fixed per part number and not reconfigurable at
//! runtime. The sequence leaves the device in standby; call `enable()` to
//! start sampling.

use crate::{accel::AccelFullScale, registers::Register};

/// The bus is expected to run in fast mode. The HAL owns the clock setting,
/// this is only the rate the timings below were tuned against.
pub const BUS_FREQUENCY_HZ: u32 = 400_000;

/// Per-sensor sample rate in hybrid mode at [`OutputDataRate::Hz100`].
pub const HYBRID_SAMPLE_RATE_HZ: u32 = 50;

/// Output data rate selection, bits DR[2:0] of CTRL_REG1.
///
/// The rates are halved when both sensors are active (hybrid mode).
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum OutputDataRate {
    Hz800 = 0,
    Hz400 = 1,
    Hz200 = 2,
    Hz100 = 3,
    Hz50 = 4,
    Hz12_5 = 5,
    Hz6_25 = 6,
    Hz1_5625 = 7,
}

impl OutputDataRate {
    pub const fn ctrl_reg1_bits(self) -> u8 {
        (self as u8) << 3
    }
}

/// Sensor selection, bits m_hms[1:0] of M_CTRL_REG1.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum SensorMode {
    AccelOnly = 0,
    MagOnly = 1,
    Hybrid = 3,
}

/// Magnetometer oversampling ratio, bits m_os[2:0] of M_CTRL_REG1.
pub const MAG_OVERSAMPLE_MAX: u8 = 0b111 << 2;

/// `hyb_autoinc_mode` bit of M_CTRL_REG2: burst reads roll over from the
/// accelerometer outputs into the magnetometer outputs.
pub const HYBRID_AUTO_INCREMENT: u8 = 1 << 5;

/// A single register write of the startup sequence.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InitStep {
    pub reg: Register,
    pub value: u8,
}

/// Register writes run, in order, when a driver is constructed.
/// Identical for the accelerometer and the magnetometer drivers.
pub const INIT_SEQUENCE: [InitStep; 5] = [
    // Standby: control registers may only be written while inactive
    InitStep {
        reg: Register::CtrlReg1,
        value: 0x00,
    },
    InitStep {
        reg: Register::MCtrlReg1,
        value: SensorMode::Hybrid as u8 | MAG_OVERSAMPLE_MAX,
    },
    InitStep {
        reg: Register::MCtrlReg2,
        value: HYBRID_AUTO_INCREMENT,
    },
    InitStep {
        reg: Register::XyzDataCfg,
        value: AccelFullScale::G2 as u8,
    },
    InitStep {
        reg: Register::CtrlReg1,
        value: OutputDataRate::Hz100.ctrl_reg1_bits(),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_sequence_matches_datasheet_bytes() {
        let bytes = INIT_SEQUENCE.map(|step| (step.reg as u8, step.value));
        assert_eq!(
            bytes,
            [(0x2A, 0x00), (0x5B, 0x1F), (0x5C, 0x20), (0x0E, 0x00), (0x2A, 0x18)]
        );
    }

    #[test]
    fn init_sequence_leaves_device_in_standby() {
        let last = INIT_SEQUENCE[INIT_SEQUENCE.len() - 1];
        assert_eq!(last.reg, Register::CtrlReg1);
        assert_eq!(last.value & crate::registers::CTRL_REG1_ACTIVE, 0);
    }
}
