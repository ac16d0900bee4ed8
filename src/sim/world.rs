//! World construction
//!
//! Places the ball and both paddles relative to the world bounds and the
//! loaded sprite sizes. Runs once at startup.

use glam::Vec2;

use super::state::{Ball, GameState, Paddle, Player};
use crate::consts::{DEFAULT_BALL_SIZE, DEFAULT_PADDLE_SIZE, PADDLE_WALL_GAP};

/// Pixel sizes of the sprites bodies are built from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteSizes {
    pub ball: Vec2,
    pub ice: Vec2,
    pub fire: Vec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        let paddle = Vec2::from(DEFAULT_PADDLE_SIZE);
        Self {
            ball: Vec2::from(DEFAULT_BALL_SIZE),
            ice: paddle,
            fire: paddle,
        }
    }
}

/// Horizontal centre of a player's paddle.
///
/// Both paddles sit half a ball width (plus a one-pixel gap) in from their
/// side wall: fire on the left, ice on the right.
pub fn paddle_x(player: Player, bounds: Vec2, ball_width: f32) -> f32 {
    let inset = ball_width / 2.0 + PADDLE_WALL_GAP;
    match player {
        Player::Fire => inset,
        Player::Ice => bounds.x - inset,
    }
}

/// Build the initial world: ball at the centre, paddles at mid-height,
/// round over, overlays showing the start prompt and "0 x 0".
pub fn build_world(bounds: Vec2, sprites: &SpriteSizes, seed: u64) -> GameState {
    let center = bounds * 0.5;

    let ball = Ball::new(center, sprites.ball);
    let ice = Paddle::new(
        Player::Ice,
        Vec2::new(paddle_x(Player::Ice, bounds, sprites.ball.x), center.y),
        sprites.ice,
    );
    let fire = Paddle::new(
        Player::Fire,
        Vec2::new(paddle_x(Player::Fire, bounds, sprites.ball.x), center.y),
        sprites.fire,
    );

    log::info!(
        "World built: {}x{}, fire paddle x={}, ice paddle x={}",
        bounds.x,
        bounds.y,
        fire.body.pos.x,
        ice.body.pos.x
    );

    GameState::new(bounds, ball, ice, fire, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Overlay, RoundState};

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_paddle_positions() {
        let state = build_world(BOUNDS, &SpriteSizes::default(), 1);
        // ball is 20 wide: inset = 10 + 1
        assert_eq!(state.fire.body.pos, Vec2::new(11.0, 300.0));
        assert_eq!(state.ice.body.pos, Vec2::new(789.0, 300.0));
    }

    #[test]
    fn test_ball_starts_centred_and_still() {
        let state = build_world(BOUNDS, &SpriteSizes::default(), 1);
        assert_eq!(state.ball.body.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.body.vel, Vec2::ZERO);
        assert_eq!(state.ball.body.bounce, Vec2::ONE);
        assert!(state.ball.body.collide_world_bounds);
    }

    #[test]
    fn test_initial_round_and_overlay() {
        let state = build_world(BOUNDS, &SpriteSizes::default(), 1);
        assert_eq!(state.round, RoundState::Over);
        assert_eq!(state.overlay.status, "Press SPACE to start game");
        assert_eq!(state.overlay.score, Overlay::INITIAL_SCORE);
        assert_eq!(state.score.winner, None);
    }

    #[test]
    fn test_paddle_inset_follows_ball_width() {
        let sprites = SpriteSizes {
            ball: Vec2::new(30.0, 30.0),
            ..SpriteSizes::default()
        };
        let state = build_world(BOUNDS, &sprites, 1);
        assert_eq!(state.fire.body.pos.x, 16.0);
        assert_eq!(state.ice.body.pos.x, 784.0);
    }

    #[test]
    fn test_paddles_immovable() {
        let state = build_world(BOUNDS, &SpriteSizes::default(), 1);
        for player in Player::ALL {
            let body = state.paddle(player).body;
            assert!(body.immovable);
            assert!(body.collide_world_bounds);
        }
    }
}
