//! Fixed-step time accumulator
//!
//! Turns irregular frame deltas into a whole number of fixed-size ticks. The tick
//! count depends only on the total time fed in, never on how it was split across
//! frames.
//!
//! Ticks are derived from total elapsed time rather than by repeatedly subtracting
//! the interval, which drifts for intervals like 5000/60 that f64 cannot represent.

use serde::{Deserialize, Serialize};

/// Slack for rounding in the elapsed-time sum (ms)
const TICK_EPSILON_MS: f64 = 1e-6;

/// Converts wall-clock deltas (milliseconds) into fixed ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStepAccumulator {
    /// Tick length in milliseconds
    interval: f64,
    /// Total time fed in
    elapsed: f64,
    /// Ticks fired so far
    fired: u64,
}

impl FixedStepAccumulator {
    /// Create a timer that ticks once per `interval` milliseconds.
    ///
    /// # Panics
    /// If `interval` is not a positive finite number.
    pub fn new(interval: f64) -> Self {
        assert!(
            interval.is_finite() && interval > 0.0,
            "tick interval must be positive, got {interval}"
        );
        Self {
            interval,
            elapsed: 0.0,
            fired: 0,
        }
    }

    /// Add `dt` milliseconds and invoke `on_tick` once per whole interval elapsed.
    ///
    /// Negative and non-finite deltas count as zero. Returns the number of ticks fired.
    pub fn advance<F: FnMut(f64)>(&mut self, dt: f64, mut on_tick: F) -> u32 {
        self.elapsed += clamp_delta(dt);

        let due = ((self.elapsed + TICK_EPSILON_MS) / self.interval).floor() as u64;
        let mut ticks = 0;
        while self.fired < due {
            self.fired += 1;
            on_tick(self.interval);
            ticks += 1;
        }
        ticks
    }
}

/// Clamp a frame delta into the valid domain (finite, non-negative)
pub fn clamp_delta(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 {
        dt
    } else {
        if dt != 0.0 {
            log::trace!("Clamping frame delta {dt} to 0");
        }
        0.0
    }
}
