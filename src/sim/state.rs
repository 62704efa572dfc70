//! Simulation state and core types
//!
//! Everything the per-frame update reads or writes lives in `Simulation`; there is
//! no ambient state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::registry::{Circle, CircleRegistry};
use super::timer::FixedStepAccumulator;
use crate::consts::*;

/// Something that happened during a frame, for the platform layer to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// A click removed this circle (play the pop sound)
    Pop { slot: usize, circle: Circle },
    /// A new circle was written to `slot`
    Spawn { slot: usize },
    /// A spawn overwrote a circle that was never popped
    Evict { slot: usize, circle: Circle },
}

/// Frame timing diagnostics, shown by the debug overlay only
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Delta of the most recent frame (ms)
    pub dt: f64,
    /// Largest delta seen since start (ms)
    #[serde(rename = "maxDt")]
    pub max_dt: f64,
    /// Frames simulated
    pub frames: u64,
    /// Circles popped
    pub pops: u64,
}

impl FrameStats {
    pub fn record(&mut self, dt: f64) {
        self.dt = dt;
        self.max_dt = self.max_dt.max(dt);
        self.frames += 1;
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Run seed for reproducibility
    pub seed: u64,
    pub registry: CircleRegistry,
    /// Spawn cadence
    pub spawn_timer: FixedStepAccumulator,
    /// Growth cadence
    pub growth_timer: FixedStepAccumulator,
    pub stats: FrameStats,
    /// Spawn area in surface pixels
    width: u32,
    height: u32,
    rng: Pcg32,
}

impl Simulation {
    /// Create a simulation with the standard cadence and capacity
    pub fn new(seed: u64, width: u32, height: u32) -> Self {
        Self::with_timing(
            seed,
            width,
            height,
            MAX_CIRCLES,
            SPAWN_INTERVAL_MS,
            GROWTH_INTERVAL_MS,
        )
    }

    /// Create a simulation with explicit capacity and intervals (ms)
    pub fn with_timing(
        seed: u64,
        width: u32,
        height: u32,
        capacity: usize,
        spawn_interval: f64,
        growth_interval: f64,
    ) -> Self {
        Self {
            seed,
            registry: CircleRegistry::new(capacity),
            spawn_timer: FixedStepAccumulator::new(spawn_interval),
            growth_timer: FixedStepAccumulator::new(growth_interval),
            stats: FrameStats::default(),
            width,
            height,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Update the spawn area (surface resize); existing circles stay put
    pub fn set_bounds(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Pick a whole-pixel position inside the bounds
    pub fn random_position(&mut self) -> (f64, f64) {
        let x = random_coord(&mut self.rng, self.width);
        let y = random_coord(&mut self.rng, self.height);
        (x, y)
    }

    /// Spawn a circle at a random position, reporting what happened
    pub fn spawn_random(&mut self, events: &mut Vec<SimEvent>) {
        let (x, y) = self.random_position();
        let (slot, evicted) = self.registry.spawn(x, y);
        log::debug!("Spawned slot {} at ({}, {})", slot, x, y);
        if let Some(circle) = evicted {
            events.push(SimEvent::Evict { slot, circle });
        }
        events.push(SimEvent::Spawn { slot });
    }
}

fn random_coord(rng: &mut Pcg32, extent: u32) -> f64 {
    if extent == 0 {
        0.0
    } else {
        rng.random_range(0..extent) as f64
    }
}
