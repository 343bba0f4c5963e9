//! Warm-up Calibration
//!
//! The first [`WARMUP_SAMPLES`] accelerometer readings after startup are
//! buffered and averaged into per-axis offsets. This removes the static
//! bias of the mounting orientation (gravity included), so afterwards a
//! resting device reads roughly zero on all axes.
//!
//! The engine has two phases:
//! - [`CalibrationPhase::WarmingUp`]: samples are collected
//! - [`CalibrationPhase::Calibrated`]: offsets are latched and never recomputed
//!
//! It is pure state, with no bus access; the drivers feed it samples in
//! centi-g.

use crate::accel::AccelF32;
use log::info;

/// Number of samples averaged into the offsets.
pub const WARMUP_SAMPLES: usize = 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum CalibrationPhase {
    WarmingUp,
    Calibrated,
}

/// Sample buffer and latched offsets.
#[derive(Clone, Debug)]
pub struct CalibrationState {
    samples: [AccelF32; WARMUP_SAMPLES],
    sample_count: usize,
    offsets: AccelF32,
    calibrated: bool,
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationState {
    pub const fn new() -> Self {
        Self {
            samples: [AccelF32::new(0.0, 0.0, 0.0); WARMUP_SAMPLES],
            sample_count: 0,
            offsets: AccelF32::new(0.0, 0.0, 0.0),
            calibrated: false,
        }
    }

    pub fn phase(&self) -> CalibrationPhase {
        if self.calibrated {
            CalibrationPhase::Calibrated
        } else {
            CalibrationPhase::WarmingUp
        }
    }

    pub fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    /// Samples collected so far, `0..=WARMUP_SAMPLES`.
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Per-axis offsets. All zero until calibrated.
    pub fn offsets(&self) -> AccelF32 {
        self.offsets
    }

    /// Feed one warm-up sample.
    ///
    /// Returns `true` on the call that completes calibration. Once
    /// calibrated, further samples are ignored.
    pub fn add_sample(&mut self, sample: AccelF32) -> bool {
        if self.calibrated {
            return false;
        }

        self.samples[self.sample_count] = sample;
        self.sample_count += 1;

        if self.sample_count < WARMUP_SAMPLES {
            return false;
        }

        self.offsets = mean(&self.samples);
        self.calibrated = true;
        info!(
            "calibration complete, offsets: x={} y={} z={}",
            self.offsets.x, self.offsets.y, self.offsets.z
        );
        true
    }

    /// Subtract the offsets from a sample.
    pub fn correct(&self, sample: AccelF32) -> AccelF32 {
        sample - self.offsets
    }
}

fn mean(samples: &[AccelF32; WARMUP_SAMPLES]) -> AccelF32 {
    let mut sum = AccelF32::default();
    for sample in samples {
        sum.x += sample.x;
        sum.y += sample.y;
        sum.z += sample.z;
    }
    let n = WARMUP_SAMPLES as f32;
    AccelF32::new(sum.x / n, sum.y / n, sum.z / n)
}
