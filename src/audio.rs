//! Pooled one-shot sound playback
//!
//! A fixed set of pre-allocated channels all holding the same sound. Each pop picks
//! the first idle channel and restarts it, so up to `SOUND_POOL_SIZE` pops can
//! overlap. When every channel is busy the request is dropped.

/// One playback channel holding a preloaded sound
pub trait PlaybackChannel {
    /// Finished playing, or never started
    fn is_idle(&self) -> bool;
    /// Start playback from the beginning. Completion is never awaited.
    fn restart(&mut self);
    /// Apply volume (0.0 - 1.0) and mute state
    fn set_volume(&mut self, volume: f64, muted: bool);
}

/// Fixed pool of playback channels
#[derive(Debug)]
pub struct SoundPool<C: PlaybackChannel> {
    channels: Vec<C>,
}

impl<C: PlaybackChannel> SoundPool<C> {
    /// An empty pool is valid and plays nothing
    pub fn new(channels: Vec<C>) -> Self {
        Self { channels }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Start the first idle channel. Returns its index, or `None` if all were busy.
    pub fn play_one(&mut self) -> Option<usize> {
        let index = self.channels.iter().position(|c| c.is_idle())?;
        log::debug!("Playing pop sound on channel {}", index);
        self.channels[index].restart();
        Some(index)
    }

    /// Set volume (clamped to 0.0 - 1.0) and mute on every channel
    pub fn set_volume(&mut self, volume: f64, muted: bool) {
        let volume = volume.clamp(0.0, 1.0);
        for channel in &mut self.channels {
            channel.set_volume(volume, muted);
        }
    }

    pub fn channels(&self) -> &[C] {
        &self.channels
    }
}

/// Idleness of a media-element channel.
///
/// `started` is our own flag: `play()` starts asynchronously, so a channel restarted
/// earlier in the same frame still reads as time zero. A paused element covers a
/// `play()` the browser refused (autoplay policy).
pub fn media_is_idle(started: bool, ended: bool, paused: bool) -> bool {
    !started || ended || paused
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioChannel;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::HtmlAudioElement;

    use super::{PlaybackChannel, SoundPool, media_is_idle};

    /// An `<audio>` element used as a playback channel
    #[derive(Debug)]
    pub struct AudioChannel {
        element: HtmlAudioElement,
        started: bool,
    }

    impl AudioChannel {
        pub fn new(src: &str) -> Result<Self, wasm_bindgen::JsValue> {
            let element = HtmlAudioElement::new_with_src(src)?;
            element.set_preload("auto");
            Ok(Self {
                element,
                started: false,
            })
        }
    }

    impl PlaybackChannel for AudioChannel {
        fn is_idle(&self) -> bool {
            media_is_idle(self.started, self.element.ended(), self.element.paused())
        }

        fn restart(&mut self) {
            self.element.set_current_time(0.0);
            // Promise rejection is ignored; the channel reads as paused and gets reused
            let _ = self.element.play();
            self.started = true;
        }

        fn set_volume(&mut self, volume: f64, muted: bool) {
            self.element.set_volume(volume);
            self.element.set_muted(muted);
        }
    }

    impl SoundPool<AudioChannel> {
        /// Create `size` channels for the sound at `src`, skipping any that fail
        pub fn load(src: &str, size: usize) -> Self {
            let channels: Vec<_> = (0..size)
                .filter_map(|i| match AudioChannel::new(src) {
                    Ok(channel) => Some(channel),
                    Err(e) => {
                        log::warn!("Failed to create audio channel {}: {:?}", i, e);
                        None
                    }
                })
                .collect();
            if channels.is_empty() {
                log::warn!("No audio channels - pop sounds disabled");
            }
            Self::new(channels)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeChannel {
        playing: bool,
        plays: u32,
        volume: f64,
        muted: bool,
    }

    impl PlaybackChannel for FakeChannel {
        fn is_idle(&self) -> bool {
            !self.playing
        }

        fn restart(&mut self) {
            self.playing = true;
            self.plays += 1;
        }

        fn set_volume(&mut self, volume: f64, muted: bool) {
            self.volume = volume;
            self.muted = muted;
        }
    }

    fn pool(size: usize) -> SoundPool<FakeChannel> {
        SoundPool::new((0..size).map(|_| FakeChannel::default()).collect())
    }

    #[test]
    fn test_play_picks_first_idle() {
        let mut pool = pool(3);
        assert_eq!(pool.play_one(), Some(0));
        assert_eq!(pool.play_one(), Some(1));

        pool.channels[0].playing = false;
        assert_eq!(pool.play_one(), Some(0));
        assert_eq!(pool.channels()[0].plays, 2);
    }

    #[test]
    fn test_excess_plays_are_dropped() {
        let mut pool = pool(3);
        let played: Vec<_> = (0..5).map(|_| pool.play_one()).collect();
        assert_eq!(played, vec![Some(0), Some(1), Some(2), None, None]);

        let total: u32 = pool.channels().iter().map(|c| c.plays).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_empty_pool_is_silent() {
        let mut pool = pool(0);
        assert!(pool.is_empty());
        assert_eq!(pool.play_one(), None);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut pool = pool(2);
        pool.set_volume(3.0, true);
        assert!(pool.channels().iter().all(|c| c.volume == 1.0 && c.muted));
        pool.set_volume(-1.0, false);
        assert!(pool.channels().iter().all(|c| c.volume == 0.0 && !c.muted));
    }

    #[test]
    fn test_media_channel_idle_states() {
        // Fresh element: paused, not ended
        assert!(media_is_idle(false, false, true));
        // Restarted this frame: play() clears paused at once, time is still zero
        assert!(!media_is_idle(true, false, false));
        // Browser refused play(): stays paused, must not block the channel
        assert!(media_is_idle(true, false, true));
        // Finished
        assert!(media_is_idle(true, true, true));
    }
}
