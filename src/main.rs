//! Cyberscape entry point
//!
//! The browser build wires the canvas, DOM and input events to the simulation
//! and drives it from `requestAnimationFrame`. The native build runs a short
//! scripted headless game and prints the final HUD snapshot.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{KeyboardEvent, MouseEvent};

    use cyberscape::Settings;
    use cyberscape::input::InputState;
    use cyberscape::platform::web::{CanvasSurface, DomHud, canvas_by_id, document, now_ms};
    use cyberscape::sim::{GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        hud: DomHud,
        input: InputState,
        settings: Settings,
    }

    impl Game {
        fn frame(&mut self, now: f64) {
            let input = self.input.take_tick_input(&self.settings.keys);
            tick(
                &mut self.state,
                &input,
                now,
                &mut self.surface,
                &mut self.hud,
                &self.settings.display,
            );
        }

        fn reset(&mut self) {
            self.state.reset(now_ms());
            self.input.release_all();
        }

        fn resize(&mut self) {
            let (w, h) = self.surface.fit_to_client();
            self.state.resize(w, h);
        }
    }

    pub fn run() -> cyberscape::Result<()> {
        log::info!("Cyberscape starting...");

        let canvas = canvas_by_id("canvas")?;
        let settings = Settings::from_json_or_default(canvas.get_attribute("data-settings").as_deref());
        let surface = CanvasSurface::new(canvas.clone())?;
        let (width, height) = surface.fit_to_client();

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, width, height, now_ms()),
            surface,
            hud: DomHud::new(&document()?),
            input: InputState::new(),
            settings,
        }));
        log::info!("Game initialized with seed: {} ({}x{})", seed, width, height);

        setup_keyboard(game.clone());
        setup_fire(game.clone());
        setup_reset_button(game.clone())?;
        setup_resize(game.clone());

        request_animation_frame(game);

        log::info!("Cyberscape running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key().to_lowercase();
                let bindings = g.settings.keys.clone();
                let bound = [
                    &bindings.up,
                    &bindings.down,
                    &bindings.left,
                    &bindings.right,
                    &bindings.process,
                ]
                .iter()
                .any(|list| list.contains(&key));
                if bound {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                }
                g.input.set_key(&key, true, &bindings);
                if g.input.take_reset() {
                    g.reset();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let bindings = g.settings.keys.clone();
                g.input.set_key(&event.key(), false, &bindings);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().input.release_all();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_fire(game: Rc<RefCell<Game>>) {
        let canvas = game.borrow().surface.canvas().clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let target = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
            game.borrow_mut().state.fire(target);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_reset_button(game: Rc<RefCell<Game>>) -> cyberscape::Result<()> {
        match document()?.get_element_by_id("reset-btn") {
            Some(btn) => {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    game.borrow_mut().reset();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
            None => log::warn!("No #reset-btn; reset is keyboard only"),
        }
        Ok(())
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut().resize();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; animation loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    if let Err(e) = wasm_game::run() {
        log::error!("Cyberscape failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cyberscape (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in the browser");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345);
    let settings = match args.next() {
        Some(path) => cyberscape::Settings::load(&path).unwrap_or_else(|e| {
            log::warn!("Ignoring settings file {}: {}", path, e);
            cyberscape::Settings::default()
        }),
        None => cyberscape::Settings::default(),
    };

    let hud = headless::run(seed, &settings, 3600);
    match serde_json::to_string_pretty(&hud) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize HUD: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;

    use cyberscape::Settings;
    use cyberscape::renderer::NullSurface;
    use cyberscape::sim::{GameState, HudSnapshot, TickInput, tick};

    const WIDTH: f32 = 1280.0;
    const HEIGHT: f32 = 720.0;
    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Play `ticks` frames with a fixed script: sweep around the field,
    /// try to process at every opportunity and fire at each radar in turn.
    pub fn run(seed: u64, settings: &Settings, ticks: u64) -> HudSnapshot {
        let mut state = GameState::new(seed, WIDTH, HEIGHT, 0.0);
        let mut surface = NullSurface::new(WIDTH, HEIGHT);
        let directions = [
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, -1.0),
        ];

        for i in 0..ticks {
            let now = i as f64 * FRAME_MS;
            if i % 30 == 0 {
                let layout = *state.layout();
                let cell = (i / 30) as usize % layout.cell_count();
                let target = layout.cell_center(cell / layout.cols, cell % layout.cols);
                state.fire(target);
            }
            let input = TickInput {
                movement: directions[(i / 90) as usize % directions.len()],
                process: true,
            };
            tick(&mut state, &input, now, &mut surface, &mut (), &settings.display);
            if state.is_terminal() {
                log::info!("Game ended after {} ticks: {:?}", state.time_ticks, state.phase);
                break;
            }
        }
        state.hud()
    }
}
