//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time enters only as frame deltas, converted to fixed ticks
//! - Seeded RNG only
//! - Stable iteration order (by registry slot)
//! - No rendering or platform dependencies

pub mod hit;
pub mod input;
pub mod registry;
pub mod state;
pub mod tick;
pub mod timer;

pub use hit::resolve_clicks;
pub use input::{InputQueue, PendingClick};
pub use registry::{Circle, CircleRegistry};
pub use state::{FrameStats, SimEvent, Simulation};
pub use tick::frame;
pub use timer::FixedStepAccumulator;
