//! Arcade Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use arcade_pong::announcer::Announcer;
    use arcade_pong::audio::{AudioManager, SoundEffect};
    use arcade_pong::consts::SIM_DT;
    use arcade_pong::input::Key;
    use arcade_pong::renderer::CanvasRenderer;
    use arcade_pong::sim::TickEvent;
    use arcade_pong::{Court, Match, Settings};

    /// Game instance holding all state
    struct Game {
        game: Match,
        renderer: CanvasRenderer,
        audio: AudioManager,
        announcer: Announcer,
        settings: Settings,
        status_el: Option<web_sys::Element>,
        last_time: f64,
    }

    impl Game {
        /// Run simulation ticks and hand their events to the sinks
        fn update(&mut self, dt: f32) {
            let events = self.game.advance(dt);
            if events.is_empty() {
                return;
            }

            for event in &events {
                if let Some(effect) = SoundEffect::for_event(event) {
                    self.audio.play(effect);
                }
            }

            if self.announcer.observe(&events, self.game.world()) {
                self.update_status();
            }

            if let Some(result) = self.game.last_result()
                && events.iter().any(|e| matches!(e, TickEvent::GameOver(_)))
            {
                let message = Announcer::verdict(result.winner);
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(message);
                }
                self.announcer.clear();
                self.update_status();
                // The alert stalls the loop; don't count that time
                self.last_time = 0.0;
            }
        }

        fn render(&self) {
            if let Err(e) = self.renderer.render(self.game.world()) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update the status line in DOM
        fn update_status(&self) {
            if !self.settings.show_status {
                return;
            }
            if let Some(el) = &self.status_el {
                el.set_text_content(Some(self.announcer.status()));
            }
        }

        fn key_down(&mut self, key: Key) {
            self.game.key_down(key);
        }

        fn key_up(&mut self, key: Key) {
            if key == Key::Mute {
                let muted = self.settings.toggle_mute();
                self.audio.apply_settings(&self.settings);
                self.settings.save();
                log::info!("Sound {}", if muted { "muted" } else { "on" });
                return;
            }
            if let Some(taunt) = self.game.key_up(key)
                && self.settings.taunts
            {
                self.audio.play(SoundEffect::for_taunt(taunt));
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Arcade Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let court = Court::from_canvas_or_default(canvas.width(), canvas.height());
        let renderer = CanvasRenderer::new(&canvas).expect("Failed to get 2d context");
        let settings = Settings::load();

        let game = Rc::new(RefCell::new(Game {
            game: Match::new(court),
            renderer,
            audio: AudioManager::new(&settings),
            announcer: Announcer::new(),
            status_el: document.get_element_by_id("pointScoredText"),
            settings,
            last_time: 0.0,
        }));

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Arcade Pong running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom(&event.key()) {
                    event.prevent_default();
                    game.borrow_mut().key_down(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_dom(&event.key()) {
                    game.borrow_mut().key_up(key);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use arcade_pong::Court;
    use arcade_pong::demo::run_headless;

    /// Ten minutes of play at 60 Hz
    const DEMO_TICKS: u64 = 60 * 60 * 10;
    const DEFAULT_SEED: u64 = 0x5eed;

    env_logger::init();
    log::info!("Arcade Pong (native) starting...");
    log::info!("Native mode runs a headless demo match - run with `trunk serve` for the web version");

    let seed = match std::env::var("ARCADE_PONG_SEED") {
        Ok(s) => s.parse().unwrap_or_else(|_| {
            log::warn!("ARCADE_PONG_SEED={s:?} is not a number, using {DEFAULT_SEED}");
            DEFAULT_SEED
        }),
        Err(_) => DEFAULT_SEED,
    };

    let report = run_headless(Court::default(), seed, DEMO_TICKS);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize demo report: {e}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
