//! Ice & Fire Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement};

    use ice_fire_pong::assets::load_sprites;
    use ice_fire_pong::consts::*;
    use ice_fire_pong::hud::Hud;
    use ice_fire_pong::input::Keyboard;
    use ice_fire_pong::renderer::SpriteRenderState;
    use ice_fire_pong::sim::{GameEvent, GameState, build_world, step_physics, update};
    use ice_fire_pong::{GameConfig, GameError};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: SpriteRenderState,
        hud: Hud,
        keyboard: Keyboard,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        /// Physics sub-steps, then one controller pass
        fn update(&mut self, dt: f32) {
            let dt = dt.min(MAX_FRAME_DT);
            self.accumulator += dt;

            let mut events = Vec::new();
            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                events.extend(step_physics(&mut self.state, SIM_DT));
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
            if substeps == MAX_SUBSTEPS {
                // Don't try to catch up after a long stall
                self.accumulator = self.accumulator.min(SIM_DT);
            }

            let input = self.keyboard.snapshot();
            events.extend(update(&mut self.state, &input));

            for event in events {
                match event {
                    GameEvent::PaddleHit(_) | GameEvent::WallBounce => {}
                    other => log::debug!("{:?}", other),
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            match self.render_state.render(&self.state) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    fn dom_err(what: &str) -> impl Fn(JsValue) -> GameError + '_ {
        move |e| GameError::Renderer(format!("{}: {:?}", what, e))
    }

    /// Find the parent element, creating it under `<body>` if the page lacks it
    fn mount_parent(document: &Document, config: &GameConfig) -> Result<HtmlElement, GameError> {
        let parent = match document.get_element_by_id(&config.parent_id) {
            Some(el) => el,
            None => {
                let body = document
                    .body()
                    .ok_or_else(|| GameError::Renderer("no <body>".into()))?;
                let el = document
                    .create_element("div")
                    .map_err(dom_err("create parent"))?;
                el.set_id(&config.parent_id);
                body.append_child(&el).map_err(dom_err("append parent"))?;
                el
            }
        };
        let parent: HtmlElement = parent
            .dyn_into()
            .map_err(|_| GameError::Renderer(format!("#{} is not an HTML element", config.parent_id)))?;
        parent
            .set_attribute(
                "style",
                &format!(
                    "position: relative; width: {}px; height: {}px;",
                    config.width, config.height
                ),
            )
            .map_err(dom_err("style parent"))?;
        Ok(parent)
    }

    /// Find `#game` or create it inside the parent, sized to the world
    fn mount_canvas(
        document: &Document,
        parent: &HtmlElement,
        config: &GameConfig,
    ) -> Result<HtmlCanvasElement, GameError> {
        let canvas = match document.get_element_by_id("game") {
            Some(el) => el,
            None => {
                let el = document
                    .create_element("canvas")
                    .map_err(dom_err("create canvas"))?;
                el.set_id("game");
                parent.append_child(&el).map_err(dom_err("append canvas"))?;
                el
            }
        };
        let canvas: HtmlCanvasElement = canvas
            .dyn_into()
            .map_err(|_| GameError::Renderer("#game is not a canvas".into()))?;
        canvas.set_width(config.width);
        canvas.set_height(config.height);
        Ok(canvas)
    }

    async fn init_renderer(
        canvas: &HtmlCanvasElement,
        config: &GameConfig,
        sprites: &ice_fire_pong::assets::Sprites,
    ) -> Result<SpriteRenderState, GameError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| GameError::Renderer(format!("failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| GameError::Renderer(format!("failed to get adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        SpriteRenderState::new(surface, &adapter, config.width, config.height, sprites).await
    }

    pub async fn run() -> Result<(), GameError> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Ice & Fire Pong starting...");

        let config = GameConfig::load();
        let window = web_sys::window().ok_or_else(|| GameError::Renderer("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| GameError::Renderer("no document".into()))?;

        let parent = mount_parent(&document, &config)?;
        let canvas = mount_canvas(&document, &parent, &config)?;
        let mut hud = Hud::new(&document, &parent, &config)?;

        let sprites = match load_sprites(&config.assets).await {
            Ok(sprites) => sprites,
            Err(e) => {
                hud.show_status("Failed to load images");
                return Err(e.into());
            }
        };

        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = build_world(config.world_bounds(), &sprites.sizes(), seed);
        log::info!("Game initialized with seed: {}", seed);

        let render_state = match init_renderer(&canvas, &config, &sprites).await {
            Ok(render_state) => render_state,
            Err(e) => {
                hud.show_status("WebGPU is not available");
                return Err(e);
            }
        };

        hud.update(&state.overlay);
        let game = Rc::new(RefCell::new(Game {
            state,
            render_state,
            hud,
            keyboard: Keyboard::new(),
            accumulator: 0.0,
            last_time: 0.0,
        }));

        if let Err(e) = setup_input_handlers(game.clone()) {
            log::warn!("{}; keyboard controls disabled", e);
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Ice & Fire Pong running!");
        Ok(())
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), GameError> {
        let window = web_sys::window()
            .ok_or_else(|| GameError::InputDeviceUnavailable("no window".into()))?;
        let listen_err =
            |e: JsValue| GameError::InputDeviceUnavailable(format!("addEventListener: {:?}", e));

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if game.borrow_mut().keyboard.key_down(&event.code()) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                }
            });
            window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
                .map_err(listen_err)?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if game.borrow_mut().keyboard.key_up(&event.code()) {
                    event.prevent_default();
                }
            });
            window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())
                .map_err(listen_err)?;
            closure.forget();
        }

        // Window blur (click outside): keyups will not arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().keyboard.release_all();
            });
            window
                .add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())
                .map_err(listen_err)?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
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
            let Game { hud, state, .. } = &mut *g;
            hud.update(&state.overlay);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        if e.is_fatal() {
            log::error!("Startup failed: {}", e);
        } else {
            log::warn!("{}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ice & Fire Pong (native) starting...");
    log::info!("Native mode runs a headless demo match - run with `trunk serve` for the web version");

    demo::run_match();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless replay of a full match with nobody at the paddles
#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use ice_fire_pong::GameConfig;
    use ice_fire_pong::consts::SIM_DT;
    use ice_fire_pong::sim::{GameEvent, TickInput, build_world, tick};

    /// Ten simulated minutes
    const MAX_TICKS: u32 = 60 * 60 * 10;

    pub fn run_match() {
        let config = GameConfig::load();
        let seed = config.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });
        let mut state = build_world(config.world_bounds(), &Default::default(), seed);
        log::info!("Demo match, seed {}", seed);

        let mut wall_bounces = 0u32;
        let mut ticks = 0;
        while ticks < MAX_TICKS {
            // Space is pressed whenever a round is over
            let input = TickInput {
                start: !state.is_round_active(),
                ..Default::default()
            };
            let events = tick(&mut state, &input, SIM_DT);
            ticks += 1;

            if events.iter().any(|e| matches!(e, GameEvent::MatchWon(_))) {
                break;
            }
            wall_bounces += events
                .iter()
                .filter(|e| matches!(e, GameEvent::WallBounce))
                .count() as u32;
        }

        match state.score.winner {
            Some(winner) => log::info!("{} won after {:.1}s", winner.label(), ticks as f32 * SIM_DT),
            None => log::info!("No winner after {:.1}s", ticks as f32 * SIM_DT),
        }
        log::info!("Wall bounces: {}", wall_bounces);

        match serde_json::to_string_pretty(&state.score) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize score: {}", e),
        }
    }
}
