//! Launching the ball toward a clicked point

use glam::Vec2;

use super::state::{BallState, PhysicsParams};

/// Velocity of fixed magnitude aimed from `from` toward `target`.
///
/// A click exactly on the ball gives `atan2(0, 0) == 0`, so the ball is
/// launched to the right.
pub fn launch_velocity(from: Vec2, target: Vec2, speed: f32) -> Vec2 {
    let delta = target - from;
    let angle = delta.y.atan2(delta.x);
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}

/// Launch `ball` toward `target`, keeping its position.
///
/// The direction is measured from the ball's center, not its top-left corner.
pub fn launch(ball: BallState, target: Vec2, params: &PhysicsParams) -> BallState {
    BallState {
        position: ball.position,
        velocity: launch_velocity(ball.center(params), target, params.initial_speed),
        is_moving: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::INITIAL_SPEED;

    /// Ball whose center sits at `(x, y)`
    fn ball_centered_at(x: f32, y: f32, params: &PhysicsParams) -> BallState {
        BallState {
            position: Vec2::new(x, y) - Vec2::splat(params.ball_radius),
            velocity: Vec2::ZERO,
            is_moving: false,
        }
    }

    #[test]
    fn test_launch_along_x_axis_is_exact() {
        let params = PhysicsParams::default();
        let ball = ball_centered_at(100.0, 100.0, &params);

        let launched = launch(ball, Vec2::new(200.0, 100.0), &params);
        assert_eq!(launched.velocity, Vec2::new(INITIAL_SPEED, 0.0));
        assert_eq!(launched.position, ball.position);
        assert!(launched.is_moving);
    }

    #[test]
    fn test_launch_aims_from_center() {
        let params = PhysicsParams::default();
        let ball = ball_centered_at(400.0, 300.0, &params);

        // Level with the center: no vertical component
        let right = launch(ball, Vec2::new(500.0, 300.0), &params);
        assert_eq!(right.velocity, Vec2::new(INITIAL_SPEED, 0.0));

        // Straight above the center: no horizontal component
        let up = launch(ball, Vec2::new(400.0, 100.0), &params);
        assert!(up.velocity.x.abs() < 1e-4);
        assert!((up.velocity.y + INITIAL_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_click_on_ball_center_launches_right() {
        let params = PhysicsParams::default();
        let ball = ball_centered_at(400.0, 300.0, &params);
        let launched = launch(ball, Vec2::new(400.0, 300.0), &params);
        assert_eq!(launched.velocity, Vec2::new(INITIAL_SPEED, 0.0));
    }

    #[test]
    fn test_launch_magnitude_is_fixed() {
        for target in [
            Vec2::new(0.0, 0.0),
            Vec2::new(1000.0, 3.0),
            Vec2::new(-5.0, 400.0),
            Vec2::new(101.0, 99.0),
        ] {
            let v = launch_velocity(Vec2::new(100.0, 100.0), target, INITIAL_SPEED);
            assert!((v.length() - INITIAL_SPEED).abs() < 1e-4, "target {target:?}");
        }
    }

    #[test]
    fn test_launch_points_at_target() {
        let from = Vec2::new(300.0, 300.0);
        let target = Vec2::new(100.0, 500.0);
        let v = launch_velocity(from, target, INITIAL_SPEED);
        let dir = (target - from).normalize();
        assert!(v.normalize().dot(dir) > 0.9999);
    }

    #[test]
    fn test_click_on_ball_launches_right() {
        let p = Vec2::new(50.0, 50.0);
        assert_eq!(launch_velocity(p, p, INITIAL_SPEED), Vec2::new(INITIAL_SPEED, 0.0));
    }

    #[test]
    fn test_relaunch_replaces_velocity() {
        let params = PhysicsParams::default();
        let ball = BallState {
            velocity: Vec2::new(-3.0, 7.0),
            is_moving: true,
            ..ball_centered_at(100.0, 100.0, &params)
        };
        let launched = launch(ball, Vec2::new(100.0, 0.0), &params);
        assert!(launched.velocity.x.abs() < 1e-4);
        assert!((launched.velocity.y + INITIAL_SPEED).abs() < 1e-4);
    }
}
