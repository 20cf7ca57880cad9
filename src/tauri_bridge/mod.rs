//! Bridge layer between Tauri and Bevy
//!
//! The web page talks to the engine only through this layer: commands are
//! validated and queued here, and frames and status snapshots are served
//! back from the shared buffers the engine publishes into.

pub mod commands;
pub mod protocol;
pub mod shared_state;

// Re-export commonly used types
pub use shared_state::{
    SharedCommandQueue, SharedFrameBuffer, SharedViewerStatus, ViewerCommand, ViewerStatus,
};
