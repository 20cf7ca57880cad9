//! Drag-to-pan camera rig with elastic return
//!
//! A drag moves the camera's planar position inside a box around the
//! position it was mounted at. Releasing hands the camera to the return
//! point, an absolute position rather than the mount, and the camera eases
//! there every frame until the next drag grabs it.

use bevy::math::Vec2;

use super::ease::Easing;
use super::tracker::DragSession;
use crate::config::camera_rig::{PAN_LIMIT, PAN_SENSITIVITY, RETURN_EASING, RETURN_POINT};

#[derive(Debug, Clone)]
pub struct CameraRig {
    mount: Vec2,
    position: Vec2,
    /// Set by the first release; the camera stays put until then
    returning_to: Option<Vec2>,
    drag: Option<DragSession>,
    sensitivity: f32,
    limit: f32,
    easing: Easing,
}

impl CameraRig {
    /// `mount` is the camera's planar (x, y) position when the page mounts.
    pub fn new(mount: Vec2) -> Self {
        Self {
            mount,
            position: mount,
            returning_to: None,
            drag: None,
            sensitivity: PAN_SENSITIVITY,
            limit: PAN_LIMIT,
            easing: RETURN_EASING,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Displacement from the mount position.
    pub fn offset(&self) -> Vec2 {
        self.position - self.mount
    }

    /// Planar camera position for the current frame.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn pointer_down(&mut self, pointer: Vec2) {
        if pointer.is_finite() {
            self.drag = Some(DragSession::start(pointer));
        }
    }

    pub fn pointer_move(&mut self, pointer: Vec2) {
        if !pointer.is_finite() {
            return;
        }
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let delta = drag.advance(pointer);
        // the scene follows the pointer: dragging right/up moves the camera left/down
        let moved = self.position + Vec2::new(-delta.x, delta.y) * self.sensitivity;
        let bound = Vec2::splat(self.limit);
        self.position = moved.clamp(self.mount - bound, self.mount + bound);
    }

    pub fn pointer_up(&mut self) {
        self.drag = None;
        self.returning_to = Some(RETURN_POINT);
    }

    /// Per-frame update: eases toward the return point unless a drag is held.
    pub fn update(&mut self) -> Vec2 {
        if let (None, Some(target)) = (self.drag, self.returning_to) {
            self.position = self.easing.step_vec2(self.position, target);
        }
        self.position
    }
}
