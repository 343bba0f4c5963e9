//! Blocking FXOS8700Q drivers.
//!
//! Two drivers share one register-access core:
//! - [`Fxos8700qAcc`]: accelerometer, with warm-up calibration and software
//!   motion detection
//! - [`Fxos8700qMag`]: magnetometer, plain reads
//!
//! Both run the same init sequence when constructed, so either one alone
//! brings the device up. The device starts in standby; call `enable()`.

use crate::{
    accel::{Accel, AccelF32, AccelFullScale},
    address::Address,
    calibration::CalibrationState,
    clock::Clock,
    config::{HYBRID_SAMPLE_RATE_HZ, INIT_SEQUENCE},
    error::{Error, InitError},
    magnetometer::{count_to_ut, Mag, MagF32},
    motion::{MotionDetector, MotionStatus},
    registers::{Axis, Register, CTRL_REG1_ACTIVE, WHO_AM_I_VALUE},
    status::DataStatus,
};
use embedded_hal::i2c::I2c;
use log::{debug, warn};

/// Bus plus device address. Register access shared by both drivers.
struct Device<I>
where
    I: I2c,
{
    i2c: I,
    address: u8,
}

impl<I> Device<I>
where
    I: I2c,
{
    fn new(i2c: I, address: Address) -> Result<Self, InitError<I>> {
        let mut device = Self {
            i2c,
            address: address.into(),
        };

        if let Err(error) = device.initialize() {
            Err(InitError {
                error,
                i2c: device.i2c,
            })
        } else {
            Ok(device)
        }
    }

    fn initialize(&mut self) -> Result<(), Error<I>> {
        for step in INIT_SEQUENCE.iter() {
            debug!(
                "write_reg {:<13}({:#04X}) = {:#04x}",
                step.reg.name(),
                step.reg as u8,
                step.value
            );
            self.write_register(step.reg, step.value)?;
        }
        Ok(())
    }

    fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .map_err(Error::WriteReadError)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, bytes)
            .map_err(Error::WriteError)
    }

    fn read_register(&mut self, reg: Register) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(&[reg as u8], &mut buf)?;
        Ok(buf[0])
    }

    fn read_registers<'a>(&mut self, reg: Register, buf: &'a mut [u8]) -> Result<&'a [u8], Error<I>> {
        self.read(&[reg as u8], buf)?;
        Ok(buf)
    }

    fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I>> {
        self.write(&[reg as u8, value])
    }

    fn set_active(&mut self, active: bool) -> Result<(), Error<I>> {
        let mut value = self.read_register(Register::CtrlReg1)?;
        if active {
            value |= CTRL_REG1_ACTIVE;
        } else {
            value &= !CTRL_REG1_ACTIVE;
        }
        self.write_register(Register::CtrlReg1, value)
    }

    fn verify(&mut self) -> Result<(), Error<I>> {
        let id = self.read_register(Register::WhoAmI)?;
        if id == WHO_AM_I_VALUE {
            Ok(())
        } else {
            warn!("unexpected WHO_AM_I {:#04x}, expected {:#04x}", id, WHO_AM_I_VALUE);
            Err(Error::WrongDevice(id))
        }
    }

    fn read_pair(&mut self, reg: Register) -> Result<[u8; 2], Error<I>> {
        let mut data = [0; 2];
        self.read_registers(reg, &mut data)?;
        Ok(data)
    }

    fn read_axes(&mut self, reg: Register) -> Result<[u8; 6], Error<I>> {
        let mut data = [0; 6];
        self.read_registers(reg, &mut data)?;
        Ok(data)
    }
}

/// FXOS8700Q accelerometer driver.
///
/// Every [`poll_motion`](Self::poll_motion) call takes one sample. The first
/// [`WARMUP_SAMPLES`](crate::calibration::WARMUP_SAMPLES) calls build the
/// calibration offsets; from the call that completes calibration onwards each
/// call also runs the motion detector.
pub struct Fxos8700qAcc<I, C>
where
    I: I2c,
    C: Clock,
{
    device: Device<I>,
    clock: C,
    calibration: CalibrationState,
    detector: MotionDetector,
}

impl<I, C> Fxos8700qAcc<I, C>
where
    I: I2c,
    C: Clock,
{
    /// Construct the driver and run the init sequence. The debounce timer
    /// starts now.
    pub fn new(i2c: I, address: Address, clock: C) -> Result<Self, InitError<I>> {
        let device = Device::new(i2c, address)?;
        let detector = MotionDetector::new(clock.now_ms());
        Ok(Self {
            device,
            clock,
            calibration: CalibrationState::new(),
            detector,
        })
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.device.i2c
    }

    /// Leave standby and start sampling.
    pub fn enable(&mut self) -> Result<(), Error<I>> {
        self.device.set_active(true)
    }

    /// Return to standby.
    pub fn disable(&mut self) -> Result<(), Error<I>> {
        self.device.set_active(false)
    }

    pub fn who_am_i(&mut self) -> Result<u8, Error<I>> {
        self.device.read_register(Register::WhoAmI)
    }

    /// Fails with [`Error::WrongDevice`] unless WHO_AM_I reads 0xC7.
    pub fn verify_device(&mut self) -> Result<(), Error<I>> {
        self.device.verify()
    }

    /// Raw STATUS register.
    pub fn data_ready(&mut self) -> Result<u8, Error<I>> {
        self.device.read_register(Register::Status)
    }

    pub fn data_status(&mut self) -> Result<DataStatus, Error<I>> {
        self.data_ready().map(DataStatus::from)
    }

    /// Per-sensor sample rate of the fixed configuration.
    pub fn sample_rate_hz(&self) -> u32 {
        HYBRID_SAMPLE_RATE_HZ
    }

    /// All three axes, in counts.
    pub fn accel(&mut self) -> Result<Accel, Error<I>> {
        let data = self.device.read_axes(Register::OutX_MSB)?;
        Ok(Accel::from_bytes(data))
    }

    /// All three axes, in g.
    pub fn accel_g(&mut self) -> Result<AccelF32, Error<I>> {
        Ok(self.accel()?.scaled(AccelFullScale::G2))
    }

    /// All three axes, in centi-g, the unit calibration works in.
    pub fn centi_g(&mut self) -> Result<AccelF32, Error<I>> {
        Ok(self.accel_g()?.to_centi_g())
    }

    pub fn axis_raw(&mut self, axis: Axis) -> Result<i16, Error<I>> {
        let [msb, lsb] = self.device.read_pair(axis.accel_msb())?;
        Ok(crate::accel::decode_14_bit(msb, lsb))
    }

    pub fn x_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::X)
    }

    pub fn y_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::Y)
    }

    pub fn z_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::Z)
    }

    /// X acceleration in g.
    pub fn x(&mut self) -> Result<f32, Error<I>> {
        Ok(AccelFullScale::G2.scale_value(self.x_raw()?))
    }

    /// Y acceleration in g.
    pub fn y(&mut self) -> Result<f32, Error<I>> {
        Ok(AccelFullScale::G2.scale_value(self.y_raw()?))
    }

    /// Z acceleration in g.
    pub fn z(&mut self) -> Result<f32, Error<I>> {
        Ok(AccelFullScale::G2.scale_value(self.z_raw()?))
    }

    /// Take one sample and advance calibration or motion detection.
    ///
    /// Returns the motion flag, `false` until calibration has completed. On
    /// a bus error the failed sample is not counted and the motion flag and
    /// timer are unchanged. The warm-up sample taken before a failed second
    /// read on the completing call still latches calibration.
    pub fn poll_motion(&mut self) -> Result<bool, Error<I>> {
        if !self.calibration.is_calibrated() {
            let sample = self.centi_g()?;
            self.calibration.add_sample(sample);
        }

        if self.calibration.is_calibrated() {
            let sample = self.centi_g()?;
            let corrected = self.calibration.correct(sample);
            self.detector.update(corrected, self.clock.now_ms());
        }

        Ok(self.detector.motion())
    }

    pub fn motion_status(&self) -> MotionStatus {
        self.detector.status()
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibration.is_calibrated()
    }

    /// Warm-up samples collected so far.
    pub fn calibration_progress(&self) -> usize {
        self.calibration.sample_count()
    }

    /// Calibration offsets in centi-g; zero until calibrated.
    pub fn offsets(&self) -> AccelF32 {
        self.calibration.offsets()
    }

    /// Offset-corrected sample from the latest motion evaluation, in centi-g.
    pub fn last_reading(&self) -> AccelF32 {
        self.detector.last_reading()
    }
}

/// FXOS8700Q magnetometer driver.
pub struct Fxos8700qMag<I>
where
    I: I2c,
{
    device: Device<I>,
}

impl<I> Fxos8700qMag<I>
where
    I: I2c,
{
    /// Construct the driver and run the init sequence.
    pub fn new(i2c: I, address: Address) -> Result<Self, InitError<I>> {
        Ok(Self {
            device: Device::new(i2c, address)?,
        })
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.device.i2c
    }

    pub fn enable(&mut self) -> Result<(), Error<I>> {
        self.device.set_active(true)
    }

    pub fn disable(&mut self) -> Result<(), Error<I>> {
        self.device.set_active(false)
    }

    pub fn who_am_i(&mut self) -> Result<u8, Error<I>> {
        self.device.read_register(Register::WhoAmI)
    }

    pub fn verify_device(&mut self) -> Result<(), Error<I>> {
        self.device.verify()
    }

    /// Raw M_DR_STATUS register.
    pub fn data_ready(&mut self) -> Result<u8, Error<I>> {
        self.device.read_register(Register::MDrStatus)
    }

    pub fn data_status(&mut self) -> Result<DataStatus, Error<I>> {
        self.data_ready().map(DataStatus::from)
    }

    pub fn sample_rate_hz(&self) -> u32 {
        HYBRID_SAMPLE_RATE_HZ
    }

    /// All three axes, in counts.
    pub fn mag(&mut self) -> Result<Mag, Error<I>> {
        let data = self.device.read_axes(Register::MOutX_MSB)?;
        Ok(Mag::from_bytes(data))
    }

    /// All three axes, in µT.
    pub fn mag_ut(&mut self) -> Result<MagF32, Error<I>> {
        Ok(self.mag()?.microtesla())
    }

    pub fn axis_raw(&mut self, axis: Axis) -> Result<i16, Error<I>> {
        let data = self.device.read_pair(axis.mag_msb())?;
        Ok(i16::from_be_bytes(data))
    }

    pub fn x_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::X)
    }

    pub fn y_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::Y)
    }

    pub fn z_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::Z)
    }

    /// X field in µT.
    pub fn x(&mut self) -> Result<f32, Error<I>> {
        Ok(count_to_ut(self.x_raw()?))
    }

    /// Y field in µT.
    pub fn y(&mut self) -> Result<f32, Error<I>> {
        Ok(count_to_ut(self.y_raw()?))
    }

    /// Z field in µT.
    pub fn z(&mut self) -> Result<f32, Error<I>> {
        Ok(count_to_ut(self.z_raw()?))
    }
}
