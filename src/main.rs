//! Circle Pop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, Window};

    use circle_pop::audio::AudioChannel;
    use circle_pop::consts::*;
    use circle_pop::renderer::{CanvasSurface, Surface};
    use circle_pop::sim::Simulation;
    use circle_pop::{Game, Settings, SoundPool};

    /// Browser-side state: the game plus its animation frame scheduling
    struct App {
        game: Game<AudioChannel, CanvasSurface>,
        /// Pending requestAnimationFrame id
        frame_handle: Option<i32>,
    }

    fn window() -> Result<Window, JsValue> {
        web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
    }

    /// Viewport size in CSS pixels
    fn viewport_size(window: &Window) -> (u32, u32) {
        let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        (w.max(0.0) as u32, h.max(0.0) as u32)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Circle Pop starting...");

        let window = window()?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?;

        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        body.append_child(&canvas)?;

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);

        let (width, height) = viewport_size(&window);
        let mut surface = CanvasSurface::new(canvas.clone())?;
        surface.resize(width, height);

        let mut sounds = SoundPool::load(POP_SOUND_URL, SOUND_POOL_SIZE);
        sounds.set_volume(settings.volume, settings.muted);

        let game = Game::new(
            Simulation::new(seed, width, height),
            sounds,
            surface,
            settings.show_debug,
        );
        let app = Rc::new(RefCell::new(App {
            game,
            frame_handle: None,
        }));

        log::info!("Game initialized with seed: {} ({}x{})", seed, width, height);

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(app.clone())?;
        setup_visibility_handler(app.clone())?;

        // Start game loop
        request_animation_frame(app);

        log::info!("Circle Pop running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Clicks are queued and applied at the start of the next frame
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            app.borrow_mut()
                .game
                .click(event.offset_x() as f64, event.offset_y() as f64);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize_handler(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = window()?;
        let window_clone = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (w, h) = viewport_size(&window_clone);
            app.borrow_mut().game.resize(w, h);
            log::info!("Resized to {}x{}", w, h);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_visibility_handler(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let visible = document_clone.visibility_state() == web_sys::VisibilityState::Visible;
            {
                let mut a = app.borrow_mut();
                if let Some(handle) = a.frame_handle.take() {
                    if let Some(window) = web_sys::window() {
                        let _ = window.cancel_animation_frame(handle);
                    }
                }
                if visible {
                    a.game.resume();
                } else {
                    a.game.suspend();
                }
            }
            if visible {
                request_animation_frame(app.clone());
            }
        });
        document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if app.borrow().frame_handle.is_some() {
            return;
        }
        let app_clone = app.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(app_clone, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => app.borrow_mut().frame_handle = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let keep_running = {
            let mut a = app.borrow_mut();
            a.frame_handle = None;
            a.game.step(time)
        };

        if keep_running {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Circle Pop (native) starting...");
    log::info!("Native mode runs a headless session - serve the wasm build for the playable version");

    headless::run(circle_pop::Settings::load());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted session: a simulated 60 Hz display, an auto-clicker, and a hidden tab
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::cell::Cell;
    use std::rc::Rc;

    use circle_pop::consts::*;
    use circle_pop::renderer::Surface;
    use circle_pop::sim::Simulation;
    use circle_pop::{Game, PlaybackChannel, Settings, SoundPool};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const SESSION_MS: f64 = 12_000.0;
    /// Length of the pop sound
    const SOUND_MS: f64 = 400.0;
    /// Hidden between these timestamps
    const HIDDEN_FROM_MS: f64 = 5_000.0;
    const HIDDEN_UNTIL_MS: f64 = 8_000.0;

    /// Channel that is busy for `SOUND_MS` after each start
    struct TimedChannel {
        now: Rc<Cell<f64>>,
        busy_until: f64,
    }

    impl PlaybackChannel for TimedChannel {
        fn is_idle(&self) -> bool {
            self.now.get() >= self.busy_until
        }

        fn restart(&mut self) {
            self.busy_until = self.now.get() + SOUND_MS;
        }

        fn set_volume(&mut self, _volume: f64, _muted: bool) {}
    }

    /// Keeps the last frame's circles and overlay text instead of drawing them
    #[derive(Default)]
    struct FrameCapture {
        circles: Vec<(f64, f64, f64)>,
        overlay: Vec<String>,
    }

    impl Surface for FrameCapture {
        fn clear(&mut self) {
            self.circles.clear();
            self.overlay.clear();
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
            self.circles.push((x, y, radius));
        }

        fn fill_text(&mut self, text: &str, _x: f64, _y: f64) {
            self.overlay.push(text.to_string());
        }
    }

    pub fn run(settings: Settings) {
        let seed = settings.seed.unwrap_or(0xC1AC1E);
        let now = Rc::new(Cell::new(0.0));

        let mut sounds = SoundPool::new(
            (0..SOUND_POOL_SIZE)
                .map(|_| TimedChannel {
                    now: now.clone(),
                    busy_until: 0.0,
                })
                .collect(),
        );
        sounds.set_volume(settings.volume, settings.muted);

        // The overlay is the session report, so it is always on here
        let mut game = Game::new(
            Simulation::new(seed, 800, 600),
            sounds,
            FrameCapture::default(),
            true,
        );

        let mut t = 0.0;
        let mut frame_index = 0u64;

        while t < SESSION_MS {
            now.set(t);

            let hidden = (HIDDEN_FROM_MS..HIDDEN_UNTIL_MS).contains(&t);
            if hidden && !game.is_suspended() {
                game.suspend();
            } else if !hidden && game.is_suspended() {
                game.resume();
            }

            if !game.is_suspended() {
                // Click the largest circle from the last frame every half second
                if frame_index.is_multiple_of(30) {
                    let target = game
                        .surface()
                        .circles
                        .iter()
                        .copied()
                        .max_by(|a, b| a.2.total_cmp(&b.2));
                    if let Some((x, y, _)) = target {
                        game.click(x, y);
                    }
                }
                game.step(t);
                frame_index += 1;
            }

            t += FRAME_MS;
        }

        log::info!(
            "Session over: {} live circles, {} sounds played, {} dropped",
            game.sim().registry.len(),
            game.sounds_played(),
            game.sounds_dropped()
        );
        for line in &game.surface().overlay {
            println!("{}", line);
        }
    }
}
