//! Ball state and the fixed physics parameters
//!
//! `position` is the top-left corner of the ball's bounding box, so the
//! reachable area on each axis is `[border, dimension - border - diameter]`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Size of the render surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Fixed physics parameters, set once when the widget is created
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Launch speed (pixels per tick)
    pub initial_speed: f32,
    /// Fraction of velocity lost every tick
    pub friction: f32,
    /// Per-component velocity floor
    pub min_speed: f32,
    pub ball_radius: f32,
    pub border_width: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            initial_speed: INITIAL_SPEED,
            friction: FRICTION,
            min_speed: MIN_SPEED,
            ball_radius: BALL_RADIUS,
            border_width: BORDER_WIDTH,
        }
    }
}

impl PhysicsParams {
    #[inline]
    pub fn diameter(&self) -> f32 {
        self.ball_radius * 2.0
    }

    /// Multiplier applied to velocity every tick
    #[inline]
    pub fn damping(&self) -> f32 {
        1.0 - self.friction
    }

    /// Reachable area for the ball's position inside `viewport`
    pub fn bounds(&self, viewport: Viewport) -> Bounds {
        let min = Vec2::splat(self.border_width);
        let max = viewport.size() - Vec2::splat(self.border_width + self.diameter());
        // A viewport too small for the ball pins it against the top/left border
        Bounds {
            min,
            max: max.max(min),
        }
    }
}

/// Axis-aligned range the ball's position is kept inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.cmpge(self.min).all() && pos.cmple(self.max).all()
    }
}

/// The simulated ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    /// Top-left corner of the ball (pixels)
    pub position: Vec2,
    /// Pixels per tick
    pub velocity: Vec2,
    pub is_moving: bool,
}

impl BallState {
    /// A stationary ball centered in the viewport
    pub fn centered(viewport: Viewport, params: &PhysicsParams) -> Self {
        let bounds = params.bounds(viewport);
        let center = viewport.size() / 2.0 - Vec2::splat(params.ball_radius);
        Self {
            position: center.clamp(bounds.min, bounds.max),
            velocity: Vec2::ZERO,
            is_moving: false,
        }
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Center of the ball; launches are aimed from here
    pub fn center(&self, params: &PhysicsParams) -> Vec2 {
        self.position + Vec2::splat(params.ball_radius)
    }
}
