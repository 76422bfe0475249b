//! Schuss entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

    use schuss::HighScore;
    use schuss::consts::{MAX_SUBSTEPS, SIM_DT};
    use schuss::platform::assets::load_sprites;
    use schuss::renderer::CanvasRenderer;
    use schuss::sim::{GameOverCause, GamePhase, GameState, TickInput, assemble_frame, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        high_score: HighScore,
        input: TickInput,
        accumulator: f32,
        last_time: f64,
        // The rAF loop starts on the intro dialog's Start button; guard
        // against double starts
        loop_running: bool,
        game_over_shown: bool,
    }

    impl Game {
        fn new(state: GameState, renderer: CanvasRenderer, high_score: HighScore) -> Self {
            Self {
                state,
                renderer: Some(renderer),
                high_score,
                input: TickInput::default(),
                accumulator: 0.0,
                last_time: 0.0,
                loop_running: false,
                game_over_shown: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let Some(renderer) = &self.renderer else {
                return;
            };

            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                tick(&mut self.state, &self.input, renderer);
                self.accumulator -= SIM_DT;
                substeps += 1;

                // Every input is a one-shot keydown event; key auto-repeat
                // re-arms held keys
                self.input = TickInput::default();
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(renderer) = &self.renderer {
                let list = assemble_frame(&mut self.state, renderer);
                renderer.begin_frame();
                renderer.draw(&list);
                renderer.draw_score(self.state.score);
                renderer.end_frame();
            }
        }

        /// Sync DOM overlays with the game phase
        fn update_overlays(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let paused = self.state.phase == GamePhase::Paused;
            set_class(&document, "pause-overlay", if paused { "" } else { "hidden" });

            if self.state.phase == GamePhase::GameOver && !self.game_over_shown {
                self.game_over_shown = true;

                if self.high_score.record(self.state.score) {
                    self.high_score.save();
                }
                set_text(&document, "high-score", &self.high_score.best.to_string());

                let message = match self.state.cause {
                    Some(GameOverCause::SkierCrashed) => "YARD SALE!!!!!",
                    Some(GameOverCause::RhinoHasEaten) => {
                        "YOU HAVE BEEN EATEN BY THE HUNGRY RHINO!!!!"
                    }
                    None => "",
                };
                set_text(&document, "game-over-message", message);
                set_text(&document, "final-score", &self.state.score.to_string());
                set_class(&document, "game-over", "");
            }
        }

        /// Reset for a fresh run
        fn restart(&mut self) {
            if let Some(renderer) = &self.renderer {
                self.state.reset(renderer);
            }
            self.input = TickInput::default();
            self.accumulator = 0.0;
            self.game_over_shown = false;

            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                set_class(&document, "game-over", "hidden");
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(document: &Document, id: &str, class: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", class);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Schuss starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Retina: backing store in device pixels, game logic in CSS pixels
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        canvas.set_width((client_w as f64 * dpr) as u32);
        canvas.set_height((client_h as f64 * dpr) as u32);
        let viewport = Vec2::new(client_w as f32, client_h as f32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Load-before-play: nothing ticks until every sprite has decoded
        let images = load_sprites().await.expect("sprite preload failed");
        let renderer = CanvasRenderer::new(ctx, images, viewport, dpr);

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed, viewport);
        state.start(&renderer);
        log::info!("Game initialized with seed: {}", seed);

        let high_score = HighScore::load();
        set_text(&document, "high-score", &high_score.best.to_string());

        let game = Rc::new(RefCell::new(Game::new(state, renderer, high_score)));

        setup_keyboard(game.clone());
        setup_restart_button(game.clone());
        setup_resume_button(game.clone());
        setup_auto_pause(game.clone());
        setup_intro(game);

        log::info!("Schuss ready");
    }

    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.loop_running {
                return;
            }
            g.loop_running = true;
        }
        request_animation_frame(game);
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

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_overlays();
        }

        request_animation_frame(game);
    }

    /// Show the how-to-play dialog and start the loop from its button.
    /// Pages without the dialog start immediately.
    fn setup_intro(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        let Some(intro) = document.get_element_by_id("intro") else {
            start_loop(game);
            return;
        };
        let _ = intro.set_attribute("class", "");

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let document = web_sys::window().unwrap().document().unwrap();
                set_class(&document, "intro", "hidden");
                start_loop(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.key().as_str() {
                "ArrowLeft" => g.input.left = true,
                "ArrowRight" => g.input.right = true,
                "ArrowDown" => g.input.down = true,
                " " => g.input.pause = true,
                _ => return,
            }
            event.prevent_default();
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().restart();
                log::info!("Game restarted");
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resume_button(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("resume-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                // Toggle back to playing
                game.borrow_mut().input.pause = true;
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.state.phase == GamePhase::Playing {
                        g.input.pause = true;
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.state.phase == GamePhase::Playing {
                    g.input.pause = true;
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Schuss (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a full scripted session through the sim to show it terminates:
/// the skier holds straight downhill until something ends the run.
#[cfg(not(target_arch = "wasm32"))]
fn headless_run() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use glam::Vec2;
    use schuss::sim::{FixedMetrics, GamePhase, GameState, TickInput, tick};

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1);
    let metrics = FixedMetrics(Vec2::new(32.0, 44.0));

    let mut state = GameState::new(seed, Vec2::new(800.0, 500.0));
    state.start(&metrics);

    let input = TickInput {
        down: true,
        ..Default::default()
    };
    let mut ticks = 0u32;
    while state.phase != GamePhase::GameOver && ticks < 10_000 {
        tick(&mut state, &input, &metrics);
        ticks += 1;
    }

    println!(
        "Headless run (seed {}): {} ticks, final score {}, ended by {:?}",
        seed, ticks, state.score, state.cause
    );
}
