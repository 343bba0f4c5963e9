mod common;

use common::*;
use embedded_hal::i2c::ErrorKind;
use fxos8700q::{address::Address, error::Error, magnetometer::Mag, sensor::Fxos8700qMag};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn new_runs_same_init_sequence() {
    let expectations = trans_init();
    let mut i2c = I2cMock::new(&expectations);

    let mag = Fxos8700qMag::new(i2c.clone(), Address::default()).unwrap();
    assert_eq!(mag.sample_rate_hz(), 50);
    mag.release();

    i2c.done();
}

#[test]
fn burst_read_is_big_endian_counts() {
    let expectations = with_init(vec![
        I2cTrans::write_read(DEV_ADDR, vec![0x33], vec![0x01, 0xF4, 0xFF, 0x06, 0x80, 0x00]),
        I2cTrans::write_read(DEV_ADDR, vec![0x33], Mag::new(500, -250, 1).to_bytes().to_vec()),
    ]);
    let mut i2c = I2cMock::new(&expectations);

    let mut mag = Fxos8700qMag::new(i2c.clone(), Address::default()).unwrap();
    assert_eq!(mag.mag().unwrap(), Mag::new(500, -250, i16::MIN));

    let ut = mag.mag_ut().unwrap();
    assert!(close(ut.x(), 50.0));
    assert!(close(ut.y(), -25.0));
    assert!(close(ut.z(), 0.1));

    i2c.done();
}

#[test]
fn single_axis_reads_use_axis_msb() {
    let expectations = with_init(vec![
        I2cTrans::write_read(DEV_ADDR, vec![0x33], vec![0x00, 0x0A]),
        I2cTrans::write_read(DEV_ADDR, vec![0x35], vec![0xFF, 0xF6]),
        I2cTrans::write_read(DEV_ADDR, vec![0x37], vec![0x7F, 0xFF]),
        I2cTrans::write_read(DEV_ADDR, vec![0x37], vec![0x03, 0xE8]),
    ]);
    let mut i2c = I2cMock::new(&expectations);

    let mut mag = Fxos8700qMag::new(i2c.clone(), Address::default()).unwrap();
    assert!(close(mag.x().unwrap(), 1.0));
    assert!(close(mag.y().unwrap(), -1.0));
    assert_eq!(mag.z_raw().unwrap(), i16::MAX);
    assert!(close(mag.z().unwrap(), 100.0));

    i2c.done();
}

#[test]
fn data_ready_reads_mag_status() {
    let expectations = with_init(vec![
        I2cTrans::write_read(DEV_ADDR, vec![0x32], vec![0x08]),
        I2cTrans::write_read(DEV_ADDR, vec![0x32], vec![0x88]),
    ]);
    let mut i2c = I2cMock::new(&expectations);

    let mut mag = Fxos8700qMag::new(i2c.clone(), Address::default()).unwrap();
    assert_eq!(mag.data_ready().unwrap(), 0x08);
    let status = mag.data_status().unwrap();
    assert!(status.is_ready());
    assert!(status.zyx_overwrite);

    i2c.done();
}

#[test]
fn enable_preserves_data_rate_bits() {
    let expectations = with_init(vec![
        I2cTrans::write_read(DEV_ADDR, vec![0x2A], vec![0x18]),
        I2cTrans::write(DEV_ADDR, vec![0x2A, 0x19]),
    ]);
    let mut i2c = I2cMock::new(&expectations);

    let mut mag = Fxos8700qMag::new(i2c.clone(), Address::default()).unwrap();
    mag.enable().unwrap();

    i2c.done();
}

#[test]
fn read_failure_is_reported_not_zeroed() {
    let expectations = with_init(vec![
        I2cTrans::write_read(DEV_ADDR, vec![0x33], vec![0; 6]).with_error(ErrorKind::NoAcknowledge(
            embedded_hal::i2c::NoAcknowledgeSource::Data,
        )),
        I2cTrans::write_read(DEV_ADDR, vec![0x2A], vec![0x00]).with_error(ErrorKind::Bus),
    ]);
    let mut i2c = I2cMock::new(&expectations);

    let mut mag = Fxos8700qMag::new(i2c.clone(), Address::default()).unwrap();
    assert!(matches!(
        mag.mag(),
        Err(Error::WriteReadError(ErrorKind::NoAcknowledge(_)))
    ));
    assert!(matches!(mag.disable(), Err(Error::WriteReadError(ErrorKind::Bus))));

    i2c.done();
}
