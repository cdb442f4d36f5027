//! Bounce Ball - a click-to-launch bouncing ball widget
//!
//! Core modules:
//! - `sim`: Deterministic simulation (launch, wall collisions, friction)
//! - `platform`: Browser/native platform abstraction (viewport size query)
//! - `widget`: State container wiring input and ticks to the simulation

pub mod platform;
pub mod sim;
pub mod widget;

pub use platform::ViewportSource;
pub use sim::{BallState, PhysicsParams, Viewport};
pub use widget::{RenderView, Widget};

/// Widget configuration constants
pub mod consts {
    /// Timer cadence for physics ticks (~60 Hz)
    pub const TICK_INTERVAL_MS: i32 = 16;

    /// Launch speed (pixels per tick)
    pub const INITIAL_SPEED: f32 = 30.0;
    /// Fraction of velocity lost every tick
    pub const FRICTION: f32 = 0.005;
    /// Velocity components below this snap to zero (pixels per tick)
    pub const MIN_SPEED: f32 = 0.5;

    /// Ball radius (44px ball)
    pub const BALL_RADIUS: f32 = 22.0;
    /// Thickness of the border around the viewport
    pub const BORDER_WIDTH: f32 = 20.0;
}
