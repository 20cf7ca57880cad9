//! Configuration constants for the viewer
//!
//! Render resolution, per-page interaction profiles, camera rig limits,
//! timer periods and encoder settings all live here so the state machines
//! in [`crate::interaction`] stay free of magic numbers.

use std::f32::consts::{FRAC_PI_4, FRAC_PI_8};
use std::time::Duration;

use bevy::color::Color;
use bevy::math::{Vec2, Vec3};

use crate::interaction::ease::Easing;
use crate::interaction::tracker::{TrackerProfile, ZoomRange};

/// Width of the offscreen render target in pixels
pub const RENDER_WIDTH: u32 = 800;

/// Height of the offscreen render target in pixels
pub const RENDER_HEIGHT: u32 = 600;

/// Target frames per second for the Bevy render loop
pub const TARGET_FPS: f64 = 60.0;

/// Settings shared by both pages
pub mod interaction {
    use super::*;

    /// Rotation applied by a single rotate-left/right press (radians)
    pub const ROTATE_STEP: f32 = FRAC_PI_8;

    /// Remaining distance under which an eased model value snaps to its target
    pub const EASING_EPSILON: f32 = 1e-5;
}

/// Home page: the building viewer
pub mod home {
    use super::*;

    pub const MODEL_ASSET: &str = "models/building.glb";

    pub const PROFILE: TrackerProfile = TrackerProfile {
        zoom: ZoomRange {
            min: 0.35,
            max: 1.0,
            step: 0.05,
        },
        initial_rotation: FRAC_PI_4,
        initial_zoom: 0.5,
        drag_sensitivity: 0.02,
    };

    pub const ROTATION_EASING: Easing = Easing::new(0.1, interaction::EASING_EPSILON);
    pub const SCALE_EASING: Easing = Easing::new(0.1, interaction::EASING_EPSILON);

    pub const MODEL_POSITION: Vec3 = Vec3::new(-1.0, -8.0, 0.0);
    pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, -5.0, 10.0);
    pub const CAMERA_LOOK_AT: Vec3 = Vec3::new(0.0, -5.0, 0.0);

    /// Sky blue behind the building
    pub const CLEAR_COLOR: Color = Color::srgb(0.53, 0.81, 0.92);
    pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
    pub const DIRECTIONAL_ILLUMINANCE: f32 = 3_000.0;
    pub const DIRECTIONAL_POSITION: Vec3 = Vec3::new(5.0, 10.0, 7.5);
    pub const SPOT_INTENSITY: f32 = 1_500_000.0;
    pub const SPOT_POSITION: Vec3 = Vec3::new(-10.0, 15.0, 10.0);
}

/// Model page: the animated TIPO-B viewer
pub mod model {
    use super::*;

    pub const MODEL_ASSET: &str = "models/TIPO-B.glb";

    pub const PROFILE: TrackerProfile = TrackerProfile {
        zoom: ZoomRange {
            min: 0.015,
            max: 0.025,
            step: 0.0025,
        },
        initial_rotation: 0.0,
        initial_zoom: 0.02,
        drag_sensitivity: 0.0,
    };

    pub const ROTATION_EASING: Easing = Easing::new(0.02, interaction::EASING_EPSILON);
    pub const SCALE_EASING: Easing = Easing::new(0.25, interaction::EASING_EPSILON);
    pub const TILT_EASING: Easing = Easing::new(0.2, interaction::EASING_EPSILON);

    /// Scale the model is displayed at before easing toward the zoom target
    pub const INITIAL_DISPLAY_SCALE: f32 = 0.6;

    pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 5.0);

    pub const CLEAR_COLOR: Color = Color::srgb(0.95, 0.95, 0.95);
    pub const AMBIENT_BRIGHTNESS: f32 = 800.0;
}

/// Ambient auto-rotation on the home page
pub mod auto_rotate {
    use super::*;

    /// Period of one automatic rotation step
    pub const TICK_PERIOD: Duration = Duration::from_millis(16);

    /// Rotation added on every tick (radians)
    pub const STEP: f32 = 0.002;

    /// Quiet period after the last interaction before auto-rotation resumes
    pub const RESUME_DELAY: Duration = Duration::from_millis(3000);
}

/// Drag-to-pan camera rig on the home page
pub mod camera_rig {
    use super::*;

    /// World units moved per pointer pixel
    pub const PAN_SENSITIVITY: f32 = 0.01;

    /// Maximum pan offset on each axis around the mount position
    pub const PAN_LIMIT: f32 = 0.5;

    pub const RETURN_EASING: Easing = Easing::new(0.05, 0.01);

    /// Absolute planar position the camera eases to once a drag is released
    pub const RETURN_POINT: Vec2 = Vec2::ZERO;
}

/// Loading overlay
pub mod loading {
    use super::*;

    /// Delay between the asset reporting ready and the controls appearing
    pub const GRACE_DELAY: Duration = Duration::from_millis(1000);
}

/// Image compression settings
pub mod compression {
    /// JPEG quality level (0-100, higher = better quality but larger size)
    pub const JPEG_QUALITY: u8 = 85;
}
