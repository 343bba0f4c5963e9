mod common;

use common::*;
use embassy_futures::block_on;
use embedded_hal::i2c::ErrorKind;
use fxos8700q::{
    accel::AccelF32,
    address::Address,
    calibration::WARMUP_SAMPLES,
    error::Error,
    magnetometer::Mag,
    sensor_async::{Fxos8700qAcc, Fxos8700qMag},
};

#[test]
fn async_acc_calibrates_and_detects() {
    let mut script = vec![
        I2cTrans::write_read(DEV_ADDR, vec![0x2A], vec![0x18]),
        I2cTrans::write(DEV_ADDR, vec![0x2A, 0x19]),
    ];
    for _ in 0..=WARMUP_SAMPLES {
        script.push(trans_accel(2048, 0, 4096));
    }
    script.push(trans_accel(2048, 0, -4096));

    let expectations = with_init(script);
    let mut i2c = I2cMock::new(&expectations);
    let clock = ManualClock::default();

    block_on(async {
        let mut acc = Fxos8700qAcc::new(i2c.clone(), Address::default(), &clock)
            .await
            .unwrap();
        acc.enable().await.unwrap();

        for _ in 0..WARMUP_SAMPLES {
            assert!(!acc.poll_motion().await.unwrap());
        }
        assert!(acc.is_calibrated());
        assert_eq!(acc.offsets(), AccelF32::new(50.0, 0.0, 100.0));

        clock.set(2001);
        assert!(acc.poll_motion().await.unwrap());
        assert_eq!(acc.last_reading(), AccelF32::new(0.0, 0.0, -200.0));
    });

    i2c.done();
}

#[test]
fn async_init_failure_hands_bus_back() {
    let expectations = [
        I2cTrans::write(DEV_ADDR, vec![0x2A, 0x00]),
        I2cTrans::write(DEV_ADDR, vec![0x5B, 0x1F]).with_error(ErrorKind::ArbitrationLoss),
    ];
    let mut i2c = I2cMock::new(&expectations);

    let result = block_on(Fxos8700qMag::new(i2c.clone(), Address::default()));
    match result {
        Ok(_) => panic!("init should fail"),
        Err(err) => assert!(matches!(err.error, Error::WriteError(ErrorKind::ArbitrationLoss))),
    }

    i2c.done();
}

#[test]
fn async_mag_reads() {
    let expectations = with_init(vec![
        I2cTrans::write_read(DEV_ADDR, vec![0x0D], vec![0xC7]),
        I2cTrans::write_read(DEV_ADDR, vec![0x33], Mag::new(-30, 40, 0).to_bytes().to_vec()),
        I2cTrans::write_read(DEV_ADDR, vec![0x35], vec![0x00, 0x64]),
    ]);
    let mut i2c = I2cMock::new(&expectations);

    block_on(async {
        let mut mag = Fxos8700qMag::new(i2c.clone(), Address::default())
            .await
            .unwrap();
        mag.verify_device().await.unwrap();
        assert_eq!(mag.mag().await.unwrap(), Mag::new(-30, 40, 0));
        assert!((mag.y().await.unwrap() - 10.0).abs() < 1e-3);
    });

    i2c.done();
}

#[test]
fn async_single_axis_reads() {
    let expectations = with_init(vec![
        I2cTrans::write_read(DEV_ADDR, vec![0x01], vec![0x10, 0x00]),
        I2cTrans::write_read(DEV_ADDR, vec![0x03], vec![0xFF, 0xFC]),
        I2cTrans::write_read(DEV_ADDR, vec![0x05], vec![0x40, 0x00]),
    ]);
    let mut i2c = I2cMock::new(&expectations);
    let clock = ManualClock::default();

    block_on(async {
        let mut acc = Fxos8700qAcc::new(i2c.clone(), Address::default(), &clock)
            .await
            .unwrap();
        assert_eq!(acc.x_raw().await.unwrap(), 1024);
        assert_eq!(acc.y_raw().await.unwrap(), -1);
        assert!((acc.z().await.unwrap() - 1.0).abs() < 1e-6);
    });

    i2c.done();

    let expectations = with_init(vec![
        I2cTrans::write_read(DEV_ADDR, vec![0x33], vec![0x00, 0x0A]),
        I2cTrans::write_read(DEV_ADDR, vec![0x35], vec![0xFF, 0xF6]),
        I2cTrans::write_read(DEV_ADDR, vec![0x37], vec![0x7F, 0xFF]),
    ]);
    let mut i2c = I2cMock::new(&expectations);

    block_on(async {
        let mut mag = Fxos8700qMag::new(i2c.clone(), Address::default())
            .await
            .unwrap();
        assert_eq!(mag.x_raw().await.unwrap(), 10);
        assert_eq!(mag.y_raw().await.unwrap(), -10);
        assert_eq!(mag.z_raw().await.unwrap(), i16::MAX);
    });

    i2c.done();
}
