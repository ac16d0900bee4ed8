//! Arcade physics for box bodies
//!
//! Velocity integration with gravity disabled, world-bound clamping with
//! per-axis bounce, and ball-vs-paddle separation. Paddles are immovable, so
//! only the ball is ever displaced by a contact.

use glam::Vec2;

use super::state::{Body, GameEvent, GameState, Player};

/// Result of a box-vs-box contact test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit axis pointing from the obstacle toward the moving body
    pub normal: Vec2,
    /// Depth along `normal` needed to separate the boxes
    pub penetration: f32,
}

/// Advance a body by its velocity
#[inline]
pub fn integrate(body: &mut Body, dt: f32) {
    body.pos += body.vel * dt;
}

/// Keep a body inside `(0, 0)..bounds`.
///
/// On each axis where the body pokes out it is moved back flush with the
/// wall and its velocity is pointed away from the wall, scaled by its bounce.
/// Returns true if any wall was touched.
pub fn collide_world_bounds(body: &mut Body, bounds: Vec2) -> bool {
    if !body.collide_world_bounds {
        return false;
    }

    let half = body.size * 0.5;
    let mut hit = false;

    if body.pos.x - half.x < 0.0 {
        body.pos.x = half.x;
        body.vel.x = body.vel.x.abs() * body.bounce.x;
        hit = true;
    } else if body.pos.x + half.x > bounds.x {
        body.pos.x = bounds.x - half.x;
        body.vel.x = -body.vel.x.abs() * body.bounce.x;
        hit = true;
    }

    if body.pos.y - half.y < 0.0 {
        body.pos.y = half.y;
        body.vel.y = body.vel.y.abs() * body.bounce.y;
        hit = true;
    } else if body.pos.y + half.y > bounds.y {
        body.pos.y = bounds.y - half.y;
        body.vel.y = -body.vel.y.abs() * body.bounce.y;
        hit = true;
    }

    hit
}

/// Contact between a moving body and an obstacle, resolved along the axis of
/// least penetration
pub fn contact(body: &Body, obstacle: &Body) -> Option<Contact> {
    let a = body.aabb();
    let b = obstacle.aabb();
    if !a.overlaps(&b) {
        return None;
    }

    let overlap = a.overlap(&b);
    let delta = body.pos - obstacle.pos;

    let contact = if overlap.x <= overlap.y {
        Contact {
            normal: Vec2::new(if delta.x >= 0.0 { 1.0 } else { -1.0 }, 0.0),
            penetration: overlap.x,
        }
    } else {
        Contact {
            normal: Vec2::new(0.0, if delta.y >= 0.0 { 1.0 } else { -1.0 }),
            penetration: overlap.y,
        }
    };
    Some(contact)
}

/// Push `body` out of an immovable `obstacle` and bounce it.
///
/// The velocity component along the contact normal is reflected (scaled by
/// the body's bounce) only if the body is moving into the obstacle, so a
/// ball already heading away is never turned back.
pub fn separate(body: &mut Body, obstacle: &Body) -> Option<Contact> {
    let hit = contact(body, obstacle)?;

    body.pos += hit.normal * hit.penetration;

    let approach = body.vel.dot(hit.normal);
    if approach < 0.0 {
        let bounce = (hit.normal * body.bounce).abs().max_element();
        body.vel -= hit.normal * approach * (1.0 + bounce);
    }

    Some(hit)
}

/// One physics step: integrate, clamp to the world, resolve ball/paddle pairs
pub fn step_physics(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let bounds = state.bounds;

    for paddle in [&mut state.ice, &mut state.fire] {
        integrate(&mut paddle.body, dt);
        collide_world_bounds(&mut paddle.body, bounds);
    }

    integrate(&mut state.ball.body, dt);
    if collide_world_bounds(&mut state.ball.body, bounds) {
        log::trace!("ball hit world bounds at {:?}", state.ball.body.pos);
        events.push(GameEvent::WallBounce);
    }

    for player in Player::ALL {
        let paddle = match player {
            Player::Ice => &state.ice.body,
            Player::Fire => &state.fire.body,
        };
        if let Some(hit) = separate(&mut state.ball.body, paddle) {
            log::trace!("ball hit {} paddle ({:?})", player.label(), hit);
            events.push(GameEvent::PaddleHit(player));
        }
    }

    // A paddle can squeeze the ball against a wall; the world wins
    collide_world_bounds(&mut state.ball.body, bounds);

    events
}
