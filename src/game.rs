//! Game controller
//!
//! Owns the simulation and the platform-facing pieces (input queue, frame clock,
//! sound pool, drawing surface) and runs one display frame at a time. The browser
//! build plugs in `<audio>` channels and a canvas; the native build and the tests
//! plug in their own.

use crate::audio::{PlaybackChannel, SoundPool};
use crate::platform::FrameClock;
use crate::renderer::{Surface, render};
use crate::sim::{InputQueue, SimEvent, Simulation, frame};

/// Game instance holding all per-session state
pub struct Game<C: PlaybackChannel, S: Surface> {
    sim: Simulation,
    input: InputQueue,
    clock: FrameClock,
    sounds: SoundPool<C>,
    surface: S,
    show_debug: bool,
    sounds_played: u64,
    sounds_dropped: u64,
}

impl<C: PlaybackChannel, S: Surface> Game<C, S> {
    pub fn new(sim: Simulation, sounds: SoundPool<C>, surface: S, show_debug: bool) -> Self {
        Self {
            sim,
            input: InputQueue::new(),
            clock: FrameClock::new(),
            sounds,
            surface,
            show_debug,
            sounds_played: 0,
            sounds_dropped: 0,
        }
    }

    /// Queue a click in surface coordinates; it applies on the next frame
    pub fn click(&mut self, x: f64, y: f64) {
        self.input.push(x, y);
    }

    /// Run one frame at display timestamp `now` (ms).
    ///
    /// Returns false while suspended; the caller should stop scheduling frames.
    pub fn step(&mut self, now: f64) -> bool {
        let Some(dt) = self.clock.frame(now) else {
            return false;
        };

        let clicks = self.input.drain();
        for event in frame(&mut self.sim, &clicks, dt) {
            match event {
                SimEvent::Pop { .. } => match self.sounds.play_one() {
                    Some(_) => self.sounds_played += 1,
                    None => {
                        self.sounds_dropped += 1;
                        log::debug!("All sound channels busy, pop sound dropped");
                    }
                },
                SimEvent::Evict { slot, circle } => {
                    log::debug!("Slot {} reused, lost circle r={}", slot, circle.radius);
                }
                SimEvent::Spawn { .. } => {}
            }
        }

        render(&self.sim, &mut self.surface, self.show_debug);
        true
    }

    /// Page hidden
    pub fn suspend(&mut self) {
        self.clock.suspend();
    }

    /// Page visible again; the next frame starts a fresh time base
    pub fn resume(&mut self) {
        self.clock.resume();
    }

    pub fn is_suspended(&self) -> bool {
        self.clock.is_suspended()
    }

    /// New viewport size: the surface follows and new circles spawn inside it
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.sim.set_bounds(width, height);
    }

    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn sounds(&self) -> &SoundPool<C> {
        &self.sounds
    }

    /// Pops that got a channel
    pub fn sounds_played(&self) -> u64 {
        self.sounds_played
    }

    /// Pops that found every channel busy
    pub fn sounds_dropped(&self) -> u64 {
        self.sounds_dropped
    }
}
