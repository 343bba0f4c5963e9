//! Asynchronous FXOS8700Q drivers.
//!
//! Mirrors the blocking drivers in [`sensor`](crate::sensor) on top of
//! `embedded-hal-async`. Only bus transfers are awaited; calibration and
//! motion detection are the same synchronous state machines.

use crate::{
    accel::{decode_14_bit, Accel, AccelF32, AccelFullScale},
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
use embedded_hal_async::i2c::I2c;
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
    async fn new(i2c: I, address: Address) -> Result<Self, InitError<I>> {
        let mut device = Self {
            i2c,
            address: address.into(),
        };

        if let Err(error) = device.initialize().await {
            Err(InitError {
                error,
                i2c: device.i2c,
            })
        } else {
            Ok(device)
        }
    }

    async fn initialize(&mut self) -> Result<(), Error<I>> {
        for step in INIT_SEQUENCE.iter() {
            debug!(
                "write_reg {:<13}({:#04X}) = {:#04x}",
                step.reg.name(),
                step.reg as u8,
                step.value
            );
            self.write_register(step.reg, step.value).await?;
        }
        Ok(())
    }

    async fn read(&mut self, bytes: &[u8], response: &mut [u8]) -> Result<(), Error<I>> {
        self.i2c
            .write_read(self.address, bytes, response)
            .await
            .map_err(Error::WriteReadError)
    }

    async fn write(&mut self, bytes: &[u8]) -> Result<(), Error<I>> {
        self.i2c
            .write(self.address, bytes)
            .await
            .map_err(Error::WriteError)
    }

    async fn read_register(&mut self, reg: Register) -> Result<u8, Error<I>> {
        let mut buf = [0; 1];
        self.read(&[reg as u8], &mut buf).await?;
        Ok(buf[0])
    }

    async fn write_register(&mut self, reg: Register, value: u8) -> Result<(), Error<I>> {
        self.write(&[reg as u8, value]).await
    }

    async fn set_active(&mut self, active: bool) -> Result<(), Error<I>> {
        let mut value = self.read_register(Register::CtrlReg1).await?;
        if active {
            value |= CTRL_REG1_ACTIVE;
        } else {
            value &= !CTRL_REG1_ACTIVE;
        }
        self.write_register(Register::CtrlReg1, value).await
    }

    async fn verify(&mut self) -> Result<(), Error<I>> {
        let id = self.read_register(Register::WhoAmI).await?;
        if id == WHO_AM_I_VALUE {
            Ok(())
        } else {
            warn!("unexpected WHO_AM_I {:#04x}, expected {:#04x}", id, WHO_AM_I_VALUE);
            Err(Error::WrongDevice(id))
        }
    }

    async fn read_pair(&mut self, reg: Register) -> Result<[u8; 2], Error<I>> {
        let mut data = [0; 2];
        self.read(&[reg as u8], &mut data).await?;
        Ok(data)
    }

    async fn read_axes(&mut self, reg: Register) -> Result<[u8; 6], Error<I>> {
        let mut data = [0; 6];
        self.read(&[reg as u8], &mut data).await?;
        Ok(data)
    }
}

/// FXOS8700Q accelerometer driver, async flavour.
///
/// See [`crate::sensor::Fxos8700qAcc`] for the polling contract.
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
    pub async fn new(i2c: I, address: Address, clock: C) -> Result<Self, InitError<I>> {
        let device = Device::new(i2c, address).await?;
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
    pub async fn enable(&mut self) -> Result<(), Error<I>> {
        self.device.set_active(true).await
    }

    /// Return to standby.
    pub async fn disable(&mut self) -> Result<(), Error<I>> {
        self.device.set_active(false).await
    }

    pub async fn who_am_i(&mut self) -> Result<u8, Error<I>> {
        self.device.read_register(Register::WhoAmI).await
    }

    /// Fails with [`Error::WrongDevice`] unless WHO_AM_I reads 0xC7.
    pub async fn verify_device(&mut self) -> Result<(), Error<I>> {
        self.device.verify().await
    }

    /// Raw STATUS register.
    pub async fn data_ready(&mut self) -> Result<u8, Error<I>> {
        self.device.read_register(Register::Status).await
    }

    pub async fn data_status(&mut self) -> Result<DataStatus, Error<I>> {
        Ok(DataStatus::from(self.data_ready().await?))
    }

    /// Per-sensor sample rate of the fixed configuration.
    pub fn sample_rate_hz(&self) -> u32 {
        HYBRID_SAMPLE_RATE_HZ
    }

    /// All three axes, in counts.
    pub async fn accel(&mut self) -> Result<Accel, Error<I>> {
        let data = self.device.read_axes(Register::OutX_MSB).await?;
        Ok(Accel::from_bytes(data))
    }

    /// All three axes, in g.
    pub async fn accel_g(&mut self) -> Result<AccelF32, Error<I>> {
        Ok(self.accel().await?.scaled(AccelFullScale::G2))
    }

    /// All three axes, in centi-g, the unit calibration works in.
    pub async fn centi_g(&mut self) -> Result<AccelF32, Error<I>> {
        Ok(self.accel_g().await?.to_centi_g())
    }

    pub async fn axis_raw(&mut self, axis: Axis) -> Result<i16, Error<I>> {
        let [msb, lsb] = self.device.read_pair(axis.accel_msb()).await?;
        Ok(decode_14_bit(msb, lsb))
    }

    pub async fn x_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::X).await
    }

    pub async fn y_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::Y).await
    }

    pub async fn z_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::Z).await
    }

    /// X acceleration in g.
    pub async fn x(&mut self) -> Result<f32, Error<I>> {
        Ok(AccelFullScale::G2.scale_value(self.x_raw().await?))
    }

    /// Y acceleration in g.
    pub async fn y(&mut self) -> Result<f32, Error<I>> {
        Ok(AccelFullScale::G2.scale_value(self.y_raw().await?))
    }

    /// Z acceleration in g.
    pub async fn z(&mut self) -> Result<f32, Error<I>> {
        Ok(AccelFullScale::G2.scale_value(self.z_raw().await?))
    }

    /// Take one sample and advance calibration or motion detection.
    ///
    /// Returns the motion flag, `false` until calibration has completed. On
    /// a bus error the failed sample is not counted and the motion flag and
    /// timer are unchanged. The warm-up sample taken before a failed second
    /// read on the completing call still latches calibration.
    pub async fn poll_motion(&mut self) -> Result<bool, Error<I>> {
        if !self.calibration.is_calibrated() {
            let sample = self.centi_g().await?;
            self.calibration.add_sample(sample);
        }

        if self.calibration.is_calibrated() {
            let sample = self.centi_g().await?;
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

/// FXOS8700Q magnetometer driver, async flavour.
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
    pub async fn new(i2c: I, address: Address) -> Result<Self, InitError<I>> {
        Ok(Self {
            device: Device::new(i2c, address).await?,
        })
    }

    /// Returns the underlying I2C peripheral, consuming this driver.
    pub fn release(self) -> I {
        self.device.i2c
    }

    pub async fn enable(&mut self) -> Result<(), Error<I>> {
        self.device.set_active(true).await
    }

    pub async fn disable(&mut self) -> Result<(), Error<I>> {
        self.device.set_active(false).await
    }

    pub async fn who_am_i(&mut self) -> Result<u8, Error<I>> {
        self.device.read_register(Register::WhoAmI).await
    }

    pub async fn verify_device(&mut self) -> Result<(), Error<I>> {
        self.device.verify().await
    }

    /// Raw M_DR_STATUS register.
    pub async fn data_ready(&mut self) -> Result<u8, Error<I>> {
        self.device.read_register(Register::MDrStatus).await
    }

    pub async fn data_status(&mut self) -> Result<DataStatus, Error<I>> {
        Ok(DataStatus::from(self.data_ready().await?))
    }

    pub fn sample_rate_hz(&self) -> u32 {
        HYBRID_SAMPLE_RATE_HZ
    }

    /// All three axes, in counts.
    pub async fn mag(&mut self) -> Result<Mag, Error<I>> {
        let data = self.device.read_axes(Register::MOutX_MSB).await?;
        Ok(Mag::from_bytes(data))
    }

    /// All three axes, in µT.
    pub async fn mag_ut(&mut self) -> Result<MagF32, Error<I>> {
        Ok(self.mag().await?.microtesla())
    }

    pub async fn axis_raw(&mut self, axis: Axis) -> Result<i16, Error<I>> {
        let data = self.device.read_pair(axis.mag_msb()).await?;
        Ok(i16::from_be_bytes(data))
    }

    pub async fn x_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::X).await
    }

    pub async fn y_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::Y).await
    }

    pub async fn z_raw(&mut self) -> Result<i16, Error<I>> {
        self.axis_raw(Axis::Z).await
    }

    /// X field in µT.
    pub async fn x(&mut self) -> Result<f32, Error<I>> {
        Ok(count_to_ut(self.x_raw().await?))
    }

    /// Y field in µT.
    pub async fn y(&mut self) -> Result<f32, Error<I>> {
        Ok(count_to_ut(self.y_raw().await?))
    }

    /// Z field in µT.
    pub async fn z(&mut self) -> Result<f32, Error<I>> {
        Ok(count_to_ut(self.z_raw().await?))
    }
}
