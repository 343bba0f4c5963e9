#![allow(dead_code)]

use core::cell::Cell;

use fxos8700q::{accel::Accel, clock::Clock};

use embedded_hal_mock as hal;
pub use hal::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

pub const DEV_ADDR: u8 = 0x1E;

/// Clock the test advances by hand.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

pub fn trans_init() -> Vec<I2cTrans> {
    vec![
        I2cTrans::write(DEV_ADDR, vec![0x2A, 0x00]),
        I2cTrans::write(DEV_ADDR, vec![0x5B, 0x1F]),
        I2cTrans::write(DEV_ADDR, vec![0x5C, 0x20]),
        I2cTrans::write(DEV_ADDR, vec![0x0E, 0x00]),
        I2cTrans::write(DEV_ADDR, vec![0x2A, 0x18]),
    ]
}

/// One all-axes accelerometer burst read returning the given counts.
pub fn trans_accel(x: i16, y: i16, z: i16) -> I2cTrans {
    I2cTrans::write_read(DEV_ADDR, vec![0x01], Accel::new(x, y, z).to_bytes().to_vec())
}

pub fn with_init(rest: Vec<I2cTrans>) -> Vec<I2cTrans> {
    let mut all = trans_init();
    all.extend(rest);
    all
}
