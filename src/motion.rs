//! Software motion (impact) detection.
//!
//! Runs on offset-corrected accelerometer samples in centi-g. A sample is a
//! *candidate* when any axis leaves its dead band. Candidates are gated by a
//! free-running timer:
//! - candidate and more than [`MIN_DETECTION_INTERVAL_MS`] since the last
//!   reset: motion is flagged and the timer restarts, so detections are at
//!   least that far apart
//! - otherwise, once the timer reads more than [`CLEAR_AFTER_SECONDS`],
//!   the flag drops
//!
//! Note the two branches read the timer at different granularities
//! (milliseconds and seconds); both are kept as the device was tuned.

use crate::accel::AccelF32;
use log::debug;

/// Dead band on X and Z, centi-g.
pub const XZ_THRESHOLD: f32 = 1.0;

/// Dead band on Y, centi-g. Wider than X/Z because of the mounting axis.
pub const Y_THRESHOLD: f32 = 1.2;

/// Minimum time between two detections.
pub const MIN_DETECTION_INTERVAL_MS: u64 = 2000;

/// The flag clears once the timer exceeds this many seconds.
pub const CLEAR_AFTER_SECONDS: f32 = 10.0;

/// Motion detection status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum MotionStatus {
    /// No motion detected
    Still,
    /// Motion detected
    Moving,
}

impl From<bool> for MotionStatus {
    fn from(moving: bool) -> Self {
        if moving {
            MotionStatus::Moving
        } else {
            MotionStatus::Still
        }
    }
}

/// True when any axis of a corrected sample is outside its dead band.
pub fn is_candidate(sample: &AccelF32) -> bool {
    libm::fabsf(sample.z) > XZ_THRESHOLD
        || libm::fabsf(sample.x) > XZ_THRESHOLD
        || sample.y > Y_THRESHOLD
        || sample.y < -Y_THRESHOLD
}

/// Latched motion flag plus its debounce timer.
#[derive(Clone, Debug)]
pub struct MotionDetector {
    last_reading: AccelF32,
    motion: bool,
    timer_start_ms: u64,
}

impl MotionDetector {
    /// Starts the debounce timer at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            last_reading: AccelF32::default(),
            motion: false,
            timer_start_ms: now_ms,
        }
    }

    pub fn motion(&self) -> bool {
        self.motion
    }

    pub fn status(&self) -> MotionStatus {
        self.motion.into()
    }

    /// Most recent corrected sample passed to [`MotionDetector::update`].
    pub fn last_reading(&self) -> AccelF32 {
        self.last_reading
    }

    /// Evaluate one corrected sample taken at `now_ms` and return the flag.
    pub fn update(&mut self, sample: AccelF32, now_ms: u64) -> bool {
        self.last_reading = sample;

        let elapsed_ms = now_ms.saturating_sub(self.timer_start_ms);
        let elapsed_seconds = elapsed_ms as f32 / 1000.0;

        if is_candidate(&sample) && elapsed_ms > MIN_DETECTION_INTERVAL_MS {
            if !self.motion {
                debug!("motion detected after {} ms", elapsed_ms);
            }
            self.motion = true;
            self.timer_start_ms = now_ms;
        } else if elapsed_seconds > CLEAR_AFTER_SECONDS {
            if self.motion {
                debug!("motion cleared after {} ms", elapsed_ms);
            }
            self.motion = false;
        }

        self.motion
    }
}
