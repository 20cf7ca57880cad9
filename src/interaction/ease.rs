//! Frame-based easing toward a target value
//!
//! Every smoothed value in the viewer (model rotation, model scale, view
//! tilt, camera pan return) goes through [`ease_toward`], each caller with
//! its own [`Easing`] parameters.

use bevy::math::Vec2;

/// Fraction of the remaining distance closed per frame, plus the distance
/// under which the value snaps onto its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    pub factor: f32,
    pub epsilon: f32,
}

impl Easing {
    pub const fn new(factor: f32, epsilon: f32) -> Self {
        Self { factor, epsilon }
    }

    pub fn step(self, current: f32, target: f32) -> f32 {
        ease_toward(current, target, self.factor, self.epsilon)
    }

    pub fn step_vec2(self, current: Vec2, target: Vec2) -> Vec2 {
        Vec2::new(self.step(current.x, target.x), self.step(current.y, target.y))
    }
}

/// Linear interpolation `current + (target - current) * factor` that lands
/// exactly on `target` once the remaining distance is under `epsilon`.
///
/// `factor` is clamped to `[0, 1]`, so the result never overshoots.
pub fn ease_toward(current: f32, target: f32, factor: f32, epsilon: f32) -> f32 {
    let next = current + (target - current) * factor.clamp(0.0, 1.0);
    if (target - next).abs() < epsilon {
        target
    } else {
        next
    }
}
