//! Camera drag rig system
//!
//! On the home page the camera pans in its own plane while the pointer is
//! dragged and eases toward the rig's return point once released. The view direction
//! never changes, so the scene slides rather than orbits.

use bevy::prelude::*;

use crate::bevy::components::PageCamera;
use crate::interaction::HomeController;

/// Move the page camera to the rig's planar position for this frame
pub fn update_camera_rig(
    mut controller: ResMut<HomeController>,
    mut cameras: Query<&mut Transform, With<PageCamera>>,
) {
    let position = controller.camera_rig.update();
    for mut transform in &mut cameras {
        transform.translation.x = position.x;
        transform.translation.y = position.y;
    }
}
