//! Platform-agnostic driver for the NXP FXOS8700Q 6-axis accelerometer and
//! magnetometer, built on `embedded-hal` 1.0 (blocking) and
//! `embedded-hal-async` 1.0.
//!
//! On top of raw reads the accelerometer driver offers warm-up calibration
//! (the first 20 samples become per-axis offsets) and software impact
//! detection with a minimum interval between detections. Poll
//! [`sensor::Fxos8700qAcc::poll_motion`] from a fixed-period loop.
//!
//! ```ignore
//! let mut acc = Fxos8700qAcc::new(i2c, Address::default(), clock).unwrap();
//! acc.enable().unwrap();
//! loop {
//!     if acc.poll_motion().unwrap() {
//!         // impact within the last 10 s
//!     }
//!     delay.delay_ms(20);
//! }
//! ```
#![cfg_attr(not(test), no_std)]

pub mod accel;
pub mod address;
pub mod calibration;
pub mod clock;
pub mod config;
pub mod error;
pub mod magnetometer;
pub mod motion;
pub mod registers;
pub mod sensor;
pub mod sensor_async;
pub mod status;
