//! Fixed timestep simulation tick
//!
//! One physics step followed by one controller update. The browser loop runs
//! several physics sub-steps per frame and calls the controller on its own;
//! `tick` is the single-step form used by the headless demo and the tests.

use super::controller;
use super::physics::step_physics;
use super::state::{GameEvent, GameState};

/// Input snapshot for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Ice paddle up (ArrowUp)
    pub ice_up: bool,
    /// Ice paddle down (ArrowDown)
    pub ice_down: bool,
    /// Fire paddle up (W)
    pub fire_up: bool,
    /// Fire paddle down (S)
    pub fire_down: bool,
    /// Start, restart or reset (Space)
    pub start: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = step_physics(state, dt);
    events.extend(controller::update(state, input));
    events
}
