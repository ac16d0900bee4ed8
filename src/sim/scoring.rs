//! Round state machine and scoring
//!
//! Two states, [`RoundState::Active`] and [`RoundState::Over`], with three
//! named transitions: `score`, `restart` and `reset`.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Overlay, Player, RoundState};
use crate::consts::{SERVE_SPEED_MIN, SERVE_SPEED_RANGE};

/// Award a point to `player` and end the round.
///
/// Freezes the ball, bumps the player's total and records a winner once the
/// total reaches the threshold. Both overlay texts are refreshed.
pub fn score(state: &mut GameState, player: Player) -> GameEvent {
    state.round = RoundState::Over;
    state.ball.freeze();

    let points = state.score.award(player);

    let event = if points >= state.score.to_win {
        state.score.winner = Some(player);
        state.overlay.status = format!("{} wins!", player.label());
        log::info!("{} wins the match ({})", player.label(), state.score.text());
        GameEvent::MatchWon(player)
    } else {
        state.overlay.status = format!("point to {}", player.label());
        log::info!("point to {} ({})", player.label(), state.score.text());
        GameEvent::PointScored(player)
    };
    state.overlay.score = state.score.text();

    event
}

/// Serve speed for one restart; the same draw is used on both axes
pub fn serve_speed<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    SERVE_SPEED_MIN + rng.random::<f32>() * SERVE_SPEED_RANGE
}

/// Re-centre the ball and, if no round is running, start one.
///
/// The ball is moved back to the centre on every call. Only a call made
/// while the round is over starts play: it clears the status text and serves
/// the ball down-right at `(speed, speed)`.
pub fn restart(state: &mut GameState) -> Option<GameEvent> {
    state.ball.body.pos = state.world_center();

    if state.is_round_active() {
        return None;
    }

    state.round = RoundState::Active;
    state.overlay.status.clear();

    let speed = serve_speed(&mut state.rng);
    state.ball.body.vel = Vec2::splat(speed);
    log::info!("round started, serve speed {:.1}", speed);

    Some(GameEvent::RoundStarted)
}

/// Clear the match and immediately start a new round
pub fn reset(state: &mut GameState) -> Vec<GameEvent> {
    state.score.clear();
    state.overlay.score = Overlay::INITIAL_SCORE.to_string();
    log::info!("match reset");

    let mut events = vec![GameEvent::MatchReset];
    events.extend(restart(state));
    events
}
