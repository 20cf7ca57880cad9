//! Bevy engine integration
//!
//! The headless renderer: page scenes spawned per `Page` state, the
//! systems that drive them from the page controllers, and the frame
//! readback feeding the `frame://` protocol.

pub mod app;
pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;

// Re-export commonly used items
pub use app::start_bevy;
