//! Circle Pop - click the growing circles
//!
//! Core modules:
//! - `game`: Frame controller tying input, simulation, sound and drawing together
//! - `sim`: Deterministic simulation (fixed-step timers, circle registry, hit testing)
//! - `renderer`: Drawing surface abstraction and the render pass
//! - `audio`: Pooled one-shot sound playback
//! - `platform`: Visibility-gated frame clock
//! - `settings`: Runtime settings from the page URL

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use audio::{PlaybackChannel, SoundPool};
pub use game::Game;
pub use platform::FrameClock;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Registry capacity; the write cursor wraps after this many spawns
    pub const MAX_CIRCLES: usize = 5;

    /// One new circle per second
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Radius grows by one pixel every 5/60 s (12 px/s)
    pub const GROWTH_INTERVAL_MS: f64 = 5000.0 / 60.0;

    /// Number of audio channels available for overlapping pop sounds
    pub const SOUND_POOL_SIZE: usize = 3;
    /// Pop sound asset, relative to the page
    pub const POP_SOUND_URL: &str = "honk.mp3";

    /// Vertical spacing of the debug overlay lines (pixels)
    pub const DEBUG_LINE_HEIGHT: f64 = 12.0;
}
