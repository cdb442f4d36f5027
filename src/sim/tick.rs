//! Fixed timestep simulation tick
//!
//! Advances the ball by one tick: integrate, resolve walls, apply friction,
//! snap slow components to zero, then recompute the moving flag.

use glam::Vec2;

use super::collision::{Bounces, resolve_axis};
use super::state::{BallState, PhysicsParams, Viewport};

/// New state plus the walls hit while producing it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    pub ball: BallState,
    pub bounces: Bounces,
}

/// Advance the ball by one fixed timestep
#[inline]
pub fn step(ball: BallState, viewport: Viewport, params: &PhysicsParams) -> BallState {
    advance(ball, viewport, params).ball
}

/// Advance the ball by one fixed timestep, reporting wall hits.
///
/// Runs every tick whether or not the ball is moving; a resting ball inside
/// the viewport comes back unchanged.
pub fn advance(ball: BallState, viewport: Viewport, params: &PhysicsParams) -> TickOutcome {
    let bounds = params.bounds(viewport);
    let tentative = ball.position + ball.velocity;

    let x = resolve_axis(tentative.x, ball.velocity.x, bounds.min.x, bounds.max.x);
    let y = resolve_axis(tentative.y, ball.velocity.y, bounds.min.y, bounds.max.y);

    let velocity = snap_to_rest(Vec2::new(x.vel, y.vel) * params.damping(), params.min_speed);

    TickOutcome {
        ball: BallState {
            position: Vec2::new(x.pos, y.pos),
            velocity,
            is_moving: velocity.x.abs() > 0.0 || velocity.y.abs() > 0.0,
        },
        bounces: Bounces { x: x.hit, y: y.hit },
    }
}

/// Zero each component whose magnitude is below `min_speed`
#[inline]
fn snap_to_rest(v: Vec2, min_speed: f32) -> Vec2 {
    let snap = |c: f32| if c.abs() < min_speed { 0.0 } else { c };
    Vec2::new(snap(v.x), snap(v.y))
}
