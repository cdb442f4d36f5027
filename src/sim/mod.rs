//! Deterministic simulation module
//!
//! All ball logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (velocities are pixels per tick)
//! - State passed by value, new state returned
//! - No rendering or platform dependencies

pub mod collision;
pub mod launch;
pub mod state;
pub mod tick;

pub use collision::{AxisResolution, Bounces, Side, resolve_axis};
pub use launch::{launch, launch_velocity};
pub use state::{BallState, Bounds, PhysicsParams, Viewport};
pub use tick::{TickOutcome, advance, step};
