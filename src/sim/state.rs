//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; there is no
//! ambient global state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::POINTS_TO_WIN;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Right paddle, arrow keys
    Ice,
    /// Left paddle, W/S
    Fire,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Ice, Player::Fire];

    /// Upper-case name used in overlay messages
    pub fn label(&self) -> &'static str {
        match self {
            Player::Ice => "ICE",
            Player::Fire => "FIRE",
        }
    }
}

/// Current phase of the round state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Ball in play, paddles follow input
    Active,
    /// Waiting for SPACE; all velocities frozen
    Over,
}

/// A box-shaped arcade physics body, positioned by its centre
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    /// Fraction of velocity kept (and reflected) on impact, per axis
    pub bounce: Vec2,
    /// Collision impulses never move this body
    pub immovable: bool,
    pub collide_world_bounds: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            bounce: Vec2::ZERO,
            immovable: false,
            collide_world_bounds: false,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }

    /// Left edge of the body; the x the scoring rule compares
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x * 0.5
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub body: Body,
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        let mut body = Body::new(pos, size);
        body.bounce = Vec2::ONE;
        body.collide_world_bounds = true;
        Self { body }
    }

    /// Stop the ball dead
    pub fn freeze(&mut self) {
        self.body.vel = Vec2::ZERO;
    }
}

/// A player's paddle; x never changes, y follows input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub player: Player,
    pub body: Body,
}

impl Paddle {
    pub fn new(player: Player, pos: Vec2, size: Vec2) -> Self {
        let mut body = Body::new(pos, size);
        body.immovable = true;
        body.collide_world_bounds = true;
        Self { player, body }
    }
}

/// Point totals and match winner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub ice: u32,
    pub fire: u32,
    pub to_win: u32,
    pub winner: Option<Player>,
}

impl Default for Score {
    fn default() -> Self {
        Self {
            ice: 0,
            fire: 0,
            to_win: POINTS_TO_WIN,
            winner: None,
        }
    }
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    fn points_mut(&mut self, player: Player) -> &mut u32 {
        match player {
            Player::Ice => &mut self.ice,
            Player::Fire => &mut self.fire,
        }
    }

    /// Add a point; returns the new total
    pub fn award(&mut self, player: Player) -> u32 {
        let points = self.points_mut(player);
        *points += 1;
        *points
    }

    /// Zero both totals and forget the winner
    pub fn clear(&mut self) {
        self.ice = 0;
        self.fire = 0;
        self.winner = None;
    }

    /// Running score, fire first: "<fire> x <ice>"
    pub fn text(&self) -> String {
        format!("{} x {}", self.fire, self.ice)
    }
}

/// The two text surfaces drawn over the playfield
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay {
    /// Status/point message, shown just above the ball's spawn point
    pub status: String,
    /// Running score near the top edge
    pub score: String,
}

impl Overlay {
    pub const START_PROMPT: &'static str = "Press SPACE to start game";
    pub const INITIAL_SCORE: &'static str = "0 x 0";

    /// Status text anchor origin (fraction of the text box), placed at the world centre
    pub const STATUS_ORIGIN: (f32, f32) = (0.5, 1.5);
    /// Score text anchor origin, placed at (width / 2, SCORE_TOP)
    pub const SCORE_ORIGIN: (f32, f32) = (0.5, 0.0);
    pub const SCORE_TOP: f32 = 10.0;
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            status: Self::START_PROMPT.to_string(),
            score: Self::INITIAL_SCORE.to_string(),
        }
    }
}

/// Things that happened during a step, for logging and the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    RoundStarted,
    PointScored(Player),
    MatchWon(Player),
    MatchReset,
    PaddleHit(Player),
    WallBounce,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// World size; the world spans (0, 0)..bounds with y pointing down
    pub bounds: Vec2,
    pub ball: Ball,
    pub ice: Paddle,
    pub fire: Paddle,
    pub score: Score,
    pub round: RoundState,
    pub overlay: Overlay,
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
}

impl GameState {
    /// Assemble a state from already-placed entities (see `world::build_world`)
    pub fn new(bounds: Vec2, ball: Ball, ice: Paddle, fire: Paddle, seed: u64) -> Self {
        Self {
            bounds,
            ball,
            ice,
            fire,
            score: Score::new(),
            round: RoundState::Over,
            overlay: Overlay::default(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn world_center(&self) -> Vec2 {
        self.bounds * 0.5
    }

    #[inline]
    pub fn is_round_active(&self) -> bool {
        self.round == RoundState::Active
    }

    pub fn paddle(&self, player: Player) -> &Paddle {
        match player {
            Player::Ice => &self.ice,
            Player::Fire => &self.fire,
        }
    }
}
