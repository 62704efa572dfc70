//! Pointer click buffering
//!
//! Clicks arrive from event listeners at any time and are only acted on at the
//! start of the next frame.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A click waiting for the next frame, in surface pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingClick {
    pub x: f64,
    pub y: f64,
}

impl PendingClick {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn pos(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// FIFO of clicks collected between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    clicks: Vec<PendingClick>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.clicks.push(PendingClick::new(x, y));
    }

    /// Take every queued click in insertion order, leaving the queue empty
    pub fn drain(&mut self) -> Vec<PendingClick> {
        std::mem::take(&mut self.clicks)
    }

    pub fn len(&self) -> usize {
        self.clicks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clicks.is_empty()
    }
}
