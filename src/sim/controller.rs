//! Per-frame game loop controller
//!
//! Runs once per rendered frame, after physics. Applies paddle input while a
//! round is active, checks whether the ball got past a paddle, and waits for
//! the start key while the round is over.

use super::scoring::{reset, restart, score};
use super::state::{GameEvent, GameState, Player};
use super::tick::TickInput;
use crate::consts::PLAYER_VELOCITY;

/// Vertical paddle velocity for a pair of held keys; down wins over up
pub fn paddle_velocity(up: bool, down: bool) -> f32 {
    let mut vy = 0.0;
    if up {
        vy = -PLAYER_VELOCITY;
    }
    if down {
        vy = PLAYER_VELOCITY;
    }
    vy
}

/// Which player, if any, just won a point.
///
/// Compares left edges: past the ice paddle is a point to fire, past the
/// fire paddle a point to ice. Fire is checked first.
pub fn scoring_player(state: &GameState) -> Option<Player> {
    let ball_x = state.ball.body.left();
    if ball_x > state.ice.body.left() {
        Some(Player::Fire)
    } else if ball_x < state.fire.body.left() {
        Some(Player::Ice)
    } else {
        None
    }
}

/// Advance the round by one frame of input
pub fn update(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.ice.body.vel.y = 0.0;
    state.fire.body.vel.y = 0.0;

    if state.is_round_active() {
        if let Some(player) = scoring_player(state) {
            // Round just ended; leave the paddles frozen for this frame
            events.push(score(state, player));
            return events;
        }

        state.ice.body.vel.y = paddle_velocity(input.ice_up, input.ice_down);
        state.fire.body.vel.y = paddle_velocity(input.fire_up, input.fire_down);

        let ball = &mut state.ball.body;
        ball.vel.y = ball.vel.y.clamp(-PLAYER_VELOCITY, PLAYER_VELOCITY);
    } else if input.start {
        if state.score.winner.is_some() {
            events.extend(reset(state));
        } else {
            events.extend(restart(state));
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RoundState;
    use crate::sim::world::{SpriteSizes, build_world};
    use glam::Vec2;

    fn new_state() -> GameState {
        build_world(Vec2::new(800.0, 600.0), &SpriteSizes::default(), 7)
    }

    fn active_state() -> GameState {
        let mut state = new_state();
        restart(&mut state);
        state
    }

    #[test]
    fn test_paddle_velocity_down_overrides_up() {
        assert_eq!(paddle_velocity(false, false), 0.0);
        assert_eq!(paddle_velocity(true, false), -400.0);
        assert_eq!(paddle_velocity(false, true), 400.0);
        assert_eq!(paddle_velocity(true, true), 400.0);
    }

    #[test]
    fn test_input_moves_paddles_while_active() {
        let mut state = active_state();
        let input = TickInput {
            ice_up: true,
            fire_down: true,
            ..Default::default()
        };
        let events = update(&mut state, &input);
        assert!(events.is_empty());
        assert_eq!(state.ice.body.vel, Vec2::new(0.0, -400.0));
        assert_eq!(state.fire.body.vel, Vec2::new(0.0, 400.0));
    }

    #[test]
    fn test_paddle_velocity_does_not_persist() {
        let mut state = active_state();
        let held = TickInput {
            ice_down: true,
            ..Default::default()
        };
        update(&mut state, &held);
        assert_eq!(state.ice.body.vel.y, 400.0);

        update(&mut state, &TickInput::default());
        assert_eq!(state.ice.body.vel.y, 0.0);
    }

    #[test]
    fn test_input_ignored_while_over() {
        let mut state = new_state();
        let input = TickInput {
            ice_up: true,
            fire_up: true,
            ..Default::default()
        };
        let events = update(&mut state, &input);
        assert!(events.is_empty());
        assert_eq!(state.round, RoundState::Over);
        assert_eq!(state.ice.body.vel, Vec2::ZERO);
        assert_eq!(state.fire.body.vel, Vec2::ZERO);
        assert_eq!(state.ball.body.vel, Vec2::ZERO);
    }

    #[test]
    fn test_ball_vertical_speed_clamped() {
        let mut state = active_state();
        state.ball.body.vel = Vec2::new(200.0, 950.0);
        update(&mut state, &TickInput::default());
        assert_eq!(state.ball.body.vel, Vec2::new(200.0, 400.0));

        state.ball.body.vel.y = -1200.0;
        update(&mut state, &TickInput::default());
        assert_eq!(state.ball.body.vel.y, -400.0);
    }

    #[test]
    fn test_ball_past_ice_scores_for_fire() {
        let mut state = active_state();
        // ice paddle left edge is 779; ball left edge 780
        state.ball.body.pos.x = 790.0;
        let input = TickInput {
            ice_up: true,
            ..Default::default()
        };

        let events = update(&mut state, &input);
        assert_eq!(events, vec![GameEvent::PointScored(Player::Fire)]);
        assert_eq!(state.round, RoundState::Over);
        assert_eq!(state.ice.body.vel, Vec2::ZERO, "paddles stay frozen");
        assert_eq!(state.overlay.score, "1 x 0");
    }

    #[test]
    fn test_ball_past_fire_scores_for_ice() {
        let mut state = active_state();
        // fire paddle left edge is 1; ball left edge 0
        state.ball.body.pos.x = 10.0;
        let events = update(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::PointScored(Player::Ice)]);
        assert_eq!(state.overlay.status, "point to ICE");
    }

    #[test]
    fn test_ball_level_with_paddle_does_not_score() {
        let mut state = active_state();
        // left edges equal: strictly greater is required
        state.ball.body.pos.x = 789.0;
        assert_eq!(scoring_player(&state), None);
    }

    #[test]
    fn test_space_restarts_without_winner() {
        let mut state = new_state();
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        let events = update(&mut state, &start);
        assert_eq!(events, vec![GameEvent::RoundStarted]);
        assert!(state.is_round_active());
    }

    #[test]
    fn test_space_resets_after_winner() {
        let mut state = active_state();
        state.score.fire = 6;
        state.ball.body.pos.x = 790.0;
        update(&mut state, &TickInput::default());
        assert_eq!(state.score.winner, Some(Player::Fire));

        let start = TickInput {
            start: true,
            ..Default::default()
        };
        let events = update(&mut state, &start);
        assert_eq!(events, vec![GameEvent::MatchReset, GameEvent::RoundStarted]);
        assert_eq!(state.score.fire, 0);
        assert_eq!(state.overlay.score, "0 x 0");
    }

    #[test]
    fn test_held_space_while_active_does_nothing() {
        let mut state = active_state();
        let pos = Vec2::new(300.0, 200.0);
        state.ball.body.pos = pos;
        let start = TickInput {
            start: true,
            ..Default::default()
        };
        let events = update(&mut state, &start);
        assert!(events.is_empty());
        assert_eq!(state.ball.body.pos, pos);
    }
}
