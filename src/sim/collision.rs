//! Wall collision detection and response
//!
//! Each axis is resolved on its own, so a ball that crosses a corner in one
//! tick reflects on both axes in the same step. Reflection is gated on the
//! direction of travel: a ball only bounces off a wall it is moving toward.

use serde::{Deserialize, Serialize};

/// Which wall of an axis was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left or top border
    Low,
    /// Right or bottom border
    High,
}

/// Result of resolving one axis against its two walls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisResolution {
    /// Position after clamping into `[min, max]`
    pub pos: f32,
    /// Velocity after reflection (before friction)
    pub vel: f32,
    /// Wall that reflected the ball, if any
    pub hit: Option<Side>,
}

/// Resolve a tentative position on one axis against the walls at `min`/`max`.
///
/// `vel` is the velocity that produced `pos`; its sign decides whether the
/// ball is heading into a wall. The returned position is always inside
/// `[min, max]`, which callers must guarantee is non-empty.
pub fn resolve_axis(pos: f32, vel: f32, min: f32, max: f32) -> AxisResolution {
    let (pos, vel, hit) = if pos <= min && vel < 0.0 {
        (min, -vel, Some(Side::Low))
    } else if pos >= max && vel > 0.0 {
        (max, -vel, Some(Side::High))
    } else {
        // Resting against a wall, or pushed outside by a shrinking viewport
        (pos.clamp(min, max), vel, None)
    };

    AxisResolution { pos, vel, hit }
}

/// Walls hit during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounces {
    pub x: Option<Side>,
    pub y: Option<Side>,
}

impl Bounces {
    pub fn any(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    pub fn count(&self) -> u32 {
        self.x.is_some() as u32 + self.y.is_some() as u32
    }
}
