//! Shared state structures for communication between Tauri and Bevy
//!
//! Commands flow from the web page into [`SharedCommandQueue`] and are
//! drained by the engine once per frame; the engine answers with frames in
//! [`SharedFrameBuffer`] and a [`ViewerStatus`] snapshot.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::error::ViewerError;
use crate::interaction::animation::AnimationState;
use crate::interaction::PageInput;
use crate::route::Page;

// =============================================================================
// Frame Buffer
// =============================================================================

/// Thread-safe RGBA frame buffer shared between Bevy and Tauri
/// Stores raw RGBA8 pixel data (4 bytes per pixel)
#[derive(Clone, Default)]
pub struct SharedFrameBuffer(pub Arc<Mutex<Option<Vec<u8>>>>);

impl SharedFrameBuffer {
    /// Copy of the latest frame, `None` until the first one is published
    pub fn latest(&self) -> Result<Option<Vec<u8>>, ViewerError> {
        let guard = self.0.lock().map_err(|_| ViewerError::Poisoned("frame"))?;
        Ok(guard.clone())
    }

    pub fn publish(&self, rgba: Vec<u8>) -> Result<(), ViewerError> {
        let mut guard = self.0.lock().map_err(|_| ViewerError::Poisoned("frame"))?;
        *guard = Some(rgba);
        Ok(())
    }
}

// =============================================================================
// Commands
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewerCommand {
    Navigate(Page),
    Input(PageInput),
}

/// Commands queued by the frontend until the engine's next frame
#[derive(Clone, Default)]
pub struct SharedCommandQueue(pub Arc<Mutex<Vec<ViewerCommand>>>);

impl SharedCommandQueue {
    pub fn push(&self, command: ViewerCommand) -> Result<(), ViewerError> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| ViewerError::Poisoned("command queue"))?;
        guard.push(command);
        Ok(())
    }

    /// Takes every queued command in arrival order.
    pub fn drain(&self) -> Result<Vec<ViewerCommand>, ViewerError> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| ViewerError::Poisoned("command queue"))?;
        Ok(std::mem::take(&mut *guard))
    }
}

// =============================================================================
// Viewer Status
// =============================================================================

/// Snapshot of the active page published after every frame
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewerStatus {
    pub route: Page,
    pub path: String,
    pub rotation: f32,
    pub zoom: f32,
    /// Asset not ready yet
    pub loading: bool,
    /// Grace delay after readiness has elapsed
    pub is_loaded: bool,
    pub controls_visible: bool,
    /// Home page only
    pub auto_rotating: Option<bool>,
    /// Model page only
    pub animation: Option<AnimationState>,
    /// Model page only
    pub view_tilt: Option<[f32; 3]>,
    pub toggle_view_available: bool,
    pub error: Option<String>,
}

impl Default for ViewerStatus {
    fn default() -> Self {
        Self {
            route: Page::Home,
            path: Page::Home.path().to_owned(),
            rotation: 0.0,
            zoom: 0.0,
            loading: true,
            is_loaded: false,
            controls_visible: false,
            auto_rotating: None,
            animation: None,
            view_tilt: None,
            toggle_view_available: false,
            error: None,
        }
    }
}

/// Thread-safe viewer status
#[derive(Clone, Default)]
pub struct SharedViewerStatus(pub Arc<Mutex<ViewerStatus>>);

impl SharedViewerStatus {
    pub fn snapshot(&self) -> Result<ViewerStatus, ViewerError> {
        let guard = self.0.lock().map_err(|_| ViewerError::Poisoned("status"))?;
        Ok(guard.clone())
    }

    pub fn replace(&self, status: ViewerStatus) -> Result<(), ViewerError> {
        let mut guard = self.0.lock().map_err(|_| ViewerError::Poisoned("status"))?;
        *guard = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_drains_in_arrival_order() {
        let queue = SharedCommandQueue::default();
        queue.push(ViewerCommand::Input(PageInput::ZoomIn)).unwrap();
        queue.push(ViewerCommand::Navigate(Page::Model)).unwrap();

        let clone = queue.clone();
        assert_eq!(
            clone.drain().unwrap(),
            vec![
                ViewerCommand::Input(PageInput::ZoomIn),
                ViewerCommand::Navigate(Page::Model),
            ]
        );
        assert!(queue.drain().unwrap().is_empty());
    }

    #[test]
    fn frame_buffer_starts_empty() {
        let frames = SharedFrameBuffer::default();
        assert_eq!(frames.latest().unwrap(), None);
        frames.publish(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(frames.latest().unwrap(), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn status_serializes_camel_case() {
        let json = serde_json::to_value(ViewerStatus::default()).unwrap();
        assert_eq!(json["route"], "home");
        assert_eq!(json["path"], "/");
        assert_eq!(json["loading"], true);
        assert_eq!(json["controlsVisible"], false);
        assert!(json["viewTilt"].is_null());
    }
}
