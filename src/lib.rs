//! Ice & Fire Pong - a two-player keyboard Pong game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, round state machine, controller)
//! - `renderer`: WebGPU sprite pipeline
//! - `assets`: Sprite fetching and decoding
//! - `input`: Keyboard state and per-frame input snapshots
//! - `config`: Scene bootstrap configuration
//! - `hud`: DOM text overlays (browser only)

pub mod assets;
pub mod config;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod hud;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{AssetError, ConfigError, GameError};

/// Game configuration constants
pub mod consts {
    /// Fixed physics timestep (60 Hz, matches the browser frame rate)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum physics substeps per rendered frame
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Largest frame delta accepted before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Canvas / world dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Paddle speed, also the cap on the ball's vertical speed
    pub const PLAYER_VELOCITY: f32 = 400.0;

    /// Points needed to win the match
    pub const POINTS_TO_WIN: u32 = 7;

    /// Serve speed is SERVE_SPEED_MIN + U[0,1) * SERVE_SPEED_RANGE on both axes
    pub const SERVE_SPEED_MIN: f32 = 150.0;
    pub const SERVE_SPEED_RANGE: f32 = 150.0;

    /// Gap between a paddle and the side wall, added to half the ball width
    pub const PADDLE_WALL_GAP: f32 = 1.0;

    /// Sprite sizes used when no images are loaded (headless runs, tests)
    pub const DEFAULT_BALL_SIZE: (f32, f32) = (20.0, 20.0);
    pub const DEFAULT_PADDLE_SIZE: (f32, f32) = (20.0, 120.0);
}
