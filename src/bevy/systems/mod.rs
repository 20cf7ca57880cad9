//! Bevy systems
//!
//! This module contains all the systems that operate on page entities
//! and resources in the Bevy ECS.

pub mod animation;
pub mod camera;
pub mod frame_extraction;
pub mod input;
pub mod page;
pub mod scene;

pub use animation::{attach_clip_player, drive_model_clip, prepare_model_clip};
pub use camera::update_camera_rig;
pub use frame_extraction::publish_frames;
pub use input::{apply_page_input, drain_viewer_commands};
pub use page::{advance_page, ease_page_model, publish_status, track_asset_readiness};
pub use scene::{ensure_render_target, spawn_home_page, spawn_model_page, teardown_page};
