//! Platform abstraction layer
//!
//! Frame timing with visibility gating. While the page is hidden no frames run;
//! on resume the first frame uses its own timestamp as both "then" and "now", so
//! the hidden interval never reaches the simulation as one huge delta.

/// Converts display-refresh timestamps (ms) into frame deltas
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Timestamp of the previous frame; `None` before the first frame after start/resume
    last: Option<f64>,
    suspended: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    /// Delta since the previous frame, or `None` while suspended.
    ///
    /// The first frame after start or resume yields 0.
    pub fn frame(&mut self, now: f64) -> Option<f64> {
        if self.suspended {
            return None;
        }
        let then = self.last.unwrap_or(now);
        self.last = Some(now);
        Some(now - then)
    }

    /// Page hidden: stop producing deltas
    pub fn suspend(&mut self) {
        if !self.suspended {
            log::info!("Frame loop suspended");
        }
        self.suspended = true;
        self.last = None;
    }

    /// Page visible again: the next frame restarts the time base
    pub fn resume(&mut self) {
        if self.suspended {
            log::info!("Frame loop resumed");
        }
        self.suspended = false;
        self.last = None;
    }
}
