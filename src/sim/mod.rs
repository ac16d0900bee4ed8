//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Input arrives as a `TickInput` snapshot, never read from a device
//! - No rendering or platform dependencies

pub mod aabb;
pub mod controller;
pub mod physics;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod world;

pub use aabb::Aabb;
pub use controller::update;
pub use physics::{Contact, step_physics};
pub use scoring::{reset, restart, score};
pub use state::{Ball, Body, GameEvent, GameState, Overlay, Paddle, Player, RoundState, Score};
pub use tick::{TickInput, tick};
pub use world::{SpriteSizes, build_world};
