//! Bevy plugins
//!
//! Render-world plugins installed next to `DefaultPlugins`.

pub mod frame_copy;

pub use frame_copy::{FrameCopier, FrameCopyPlugin};
