//! Bevy component definitions
//!
//! This module contains the component markers and data structures used
//! to tag page entities in the Bevy ECS (Entity Component System).

use bevy::prelude::*;

use crate::interaction::ease::Easing;
use crate::interaction::ModelTargets;

/// Marker component for the page camera rendering into the offscreen target
#[derive(Component)]
pub struct PageCamera;

/// Marker component for the glTF scene root of the active page
#[derive(Component)]
pub struct PageModel;

/// Displayed transform values of the page model
///
/// These chase the page controller's targets each frame through
/// [`Easing::step`]; the entity's `Transform` is rebuilt from them.
#[derive(Component, Debug, Clone)]
pub struct EasedModel {
    pub rotation: f32,
    pub scale: f32,
    pub tilt: f32,
    pub rotation_easing: Easing,
    pub scale_easing: Easing,
    pub tilt_easing: Easing,
}

impl EasedModel {
    /// Moves every displayed value one easing step toward `targets`.
    pub fn step(&mut self, targets: ModelTargets) {
        self.rotation = self.rotation_easing.step(self.rotation, targets.rotation);
        self.scale = self.scale_easing.step(self.scale, targets.zoom);
        self.tilt = self.tilt_easing.step(self.tilt, targets.tilt);
    }

    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(bevy::math::EulerRot::XYZ, self.tilt, self.rotation, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_uses_per_axis_easing() {
        let mut model = EasedModel {
            rotation: 0.0,
            scale: 0.0,
            tilt: 0.0,
            rotation_easing: Easing::new(0.5, 1e-5),
            scale_easing: Easing::new(1.0, 1e-5),
            tilt_easing: Easing::new(0.25, 1e-5),
        };
        model.step(ModelTargets {
            rotation: 2.0,
            zoom: 3.0,
            tilt: 4.0,
        });
        assert_eq!(model.rotation, 1.0);
        assert_eq!(model.scale, 3.0);
        assert_eq!(model.tilt, 1.0);
    }
}
