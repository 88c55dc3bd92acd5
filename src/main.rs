//! Dino Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use dino_runner::Tuning;
    use dino_runner::frame::{FrameOutcome, Game};
    use dino_runner::renderer::RenderState;
    use dino_runner::sim::GamePhase;

    /// Game plus its presentation resources
    struct App {
        game: Game,
        render_state: Option<RenderState>,
    }

    impl App {
        /// Render the current frame
        fn render(&mut self) {
            let snapshot = self.game.snapshot();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&snapshot) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let snapshot = self.game.snapshot();

            if let Some(el) = document.get_element_by_id("score") {
                el.set_text_content(Some(&format!("Score: {}", snapshot.score)));
            }
            if let Some(el) = document.get_element_by_id("high-score") {
                el.set_text_content(Some(&format!("High Score: {}", snapshot.high_score)));
            }

            // The live score is already 0 once over; show the captured one
            if let Some(el) = document.get_element_by_id("game-over") {
                if let (GamePhase::Over, Some(final_score)) = (snapshot.phase, snapshot.final_score)
                {
                    let _ = el.class_list().remove_1("hidden");
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&format!("Final Score: {}", final_score)));
                    }
                } else {
                    let _ = el.class_list().add_1("hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Dino Runner starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let tuning = Tuning::load();

        // Backing store at device resolution, CSS keeps the logical size
        let dpr = window.device_pixel_ratio();
        let width = (tuning.canvas_width as f64 * dpr) as u32;
        let height = (tuning.canvas_height as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);
        let css = tuning.css_size();
        let _ = canvas.set_attribute("style", &css);
        if let Some(container) = document.get_element_by_id("game") {
            let _ = container.set_attribute("style", &css);
        }

        let canvas_size = Vec2::new(tuning.canvas_width, tuning.canvas_height);
        let app = Rc::new(RefCell::new(App {
            game: Game::new(tuning),
            render_state: None,
        }));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                let adapter = instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await;
                match adapter {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        match RenderState::new(surface, &adapter, width, height, canvas_size)
                            .await
                        {
                            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create renderer: {}", e),
                        }
                    }
                    Err(e) => log::error!("Failed to get adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.class_list().add_1("hidden");
        }

        setup_input_handlers(&canvas, app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Dino Runner running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let rearm = {
                    let mut a = app.borrow_mut();
                    match event.code().as_str() {
                        "Space" | "ArrowUp" | "KeyW" => {
                            event.prevent_default();
                            a.game.request_action()
                        }
                        "KeyR" | "Enter" => a.game.request_restart(),
                        "KeyI" => {
                            a.game.toggle_autopilot();
                            false
                        }
                        _ => false,
                    }
                };
                if rearm {
                    request_animation_frame(app.clone());
                }
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            }
            closure.forget();
        }

        // Tap/click on the canvas
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let rearm = app.borrow_mut().game.request_action();
                if rearm {
                    request_animation_frame(app.clone());
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        let outcome = {
            let mut a = app.borrow_mut();
            let report = a.game.frame(time);
            a.render();
            a.update_hud();
            report.outcome
        };

        // Stopped loops are re-armed by a restart request
        if outcome == FrameOutcome::Continue {
            request_animation_frame(app);
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
    log::info!("Dino Runner (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    run_headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Simulate a minute of autopilot at 60 Hz, then let the runner crash and
/// restart once.
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo() {
    use dino_runner::frame::{FrameOutcome, Game};
    use dino_runner::sim::GameEvent;
    use dino_runner::Tuning;

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const DEMO_FRAMES: u32 = 60 * 60;

    let mut game = Game::new(Tuning::load());
    game.toggle_autopilot();

    let mut t = 0.0;
    let (mut jumps, mut spawns) = (0u32, 0u32);
    for _ in 0..DEMO_FRAMES {
        let report = game.frame(t);
        t += FRAME_MS;
        for event in &report.events {
            match event {
                GameEvent::Jumped => jumps += 1,
                GameEvent::Spawned => spawns += 1,
                _ => {}
            }
        }
        if report.outcome == FrameOutcome::Stop {
            break;
        }
    }
    let snapshot = game.snapshot();
    log::info!(
        "Autopilot: {} obstacles, {} jumps, score {} ({:?})",
        spawns,
        jumps,
        snapshot.score,
        snapshot.phase
    );

    // Hands off until the next obstacle connects
    game.toggle_autopilot();
    let (t, stopped) = game.run_until_stopped(t, FRAME_MS, DEMO_FRAMES);
    if !stopped {
        log::warn!("No crash within {} frames, stopping demo", DEMO_FRAMES);
        return;
    }
    log::info!(
        "Crashed: final score {:?}, high score {}",
        game.snapshot().final_score,
        game.snapshot().high_score
    );

    if game.request_restart() {
        game.frame(t + 5_000.0);
    }
    log::info!("Restarted: {:?}", game.snapshot().phase);
}
