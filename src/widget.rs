//! Widget state container
//!
//! Owns the ball and the instructions flag, and is the only thing that
//! mutates them: `click` (Input Handler) and `tick` (Physics Stepper).

use glam::Vec2;
use serde::Serialize;

use crate::platform::ViewportSource;
use crate::sim::{BallState, Bounces, PhysicsParams, Side, advance, launch};

/// What the renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderView {
    /// Left edge of the ball (pixels)
    pub left: f32,
    /// Top edge of the ball (pixels)
    pub top: f32,
    pub diameter: f32,
    pub instructions_visible: bool,
}

/// The bouncing ball widget
pub struct Widget<V: ViewportSource> {
    ball: BallState,
    instructions_visible: bool,
    params: PhysicsParams,
    viewport: V,
    ticks: u64,
    bounces: u64,
}

impl<V: ViewportSource> Widget<V> {
    /// Mount with the default constants and a centered, stationary ball
    pub fn new(viewport: V) -> Self {
        Self::with_params(viewport, PhysicsParams::default())
    }

    pub fn with_params(viewport: V, params: PhysicsParams) -> Self {
        let size = viewport.viewport();
        Self {
            ball: BallState::centered(size, &params),
            instructions_visible: true,
            params,
            viewport,
            ticks: 0,
            bounces: 0,
        }
    }

    /// Launch the ball toward a click at `(x, y)`, relative to the surface
    pub fn click(&mut self, x: f32, y: f32) {
        self.ball = launch(self.ball, Vec2::new(x, y), &self.params);
        self.instructions_visible = false;

        let v = self.ball.velocity;
        log::info!(
            "Launch toward ({:.0}, {:.0}): angle {:.1}°, velocity ({:.2}, {:.2})",
            x,
            y,
            v.y.atan2(v.x).to_degrees(),
            v.x,
            v.y
        );
    }

    /// Run one physics tick against the live viewport size
    pub fn tick(&mut self) -> Bounces {
        let viewport = self.viewport.viewport();
        let was_moving = self.ball.is_moving;
        let outcome = advance(self.ball, viewport, &self.params);

        self.ball = outcome.ball;
        self.ticks += 1;
        self.bounces += u64::from(outcome.bounces.count());

        if let Some(side) = outcome.bounces.x {
            log::debug!("Bounce off {} wall", if side == Side::Low { "left" } else { "right" });
        }
        if let Some(side) = outcome.bounces.y {
            log::debug!("Bounce off {} wall", if side == Side::Low { "top" } else { "bottom" });
        }
        if was_moving && !self.ball.is_moving {
            log::info!(
                "Ball at rest at ({:.1}, {:.1}) after {} ticks",
                self.ball.position.x,
                self.ball.position.y,
                self.ticks
            );
        }
        log::trace!("tick {}: {:?}", self.ticks, self.ball);

        outcome.bounces
    }

    pub fn view(&self) -> RenderView {
        RenderView {
            left: self.ball.position.x,
            top: self.ball.position.y,
            diameter: self.params.diameter(),
            instructions_visible: self.instructions_visible,
        }
    }

    pub fn ball(&self) -> BallState {
        self.ball
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    /// Ticks run since mount
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Wall hits since mount (a corner counts twice)
    pub fn bounces(&self) -> u64 {
        self.bounces
    }
}
