//! Tauri command handlers
//!
//! This module contains all the Tauri command functions that can be invoked
//! from the frontend JavaScript code. Commands only validate and enqueue;
//! the engine applies them on its next frame.

use tauri::State;
use tracing::{debug, info};

use super::shared_state::{SharedCommandQueue, SharedViewerStatus, ViewerCommand, ViewerStatus};
use crate::config::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::error::ViewerError;
use crate::interaction::PageInput;
use crate::route::Page;

fn enqueue(queue: &SharedCommandQueue, input: PageInput) -> Result<(), ViewerError> {
    let input = input.validate()?;
    debug!(?input, "queued page input");
    queue.push(ViewerCommand::Input(input))
}

/// Switch to the page behind `path` (`/` or `/modelpage`)
#[tauri::command]
pub fn navigate(queue: State<SharedCommandQueue>, path: String) -> Result<(), ViewerError> {
    let page: Page = path.parse()?;
    info!(%page, "navigate");
    queue.push(ViewerCommand::Navigate(page))
}

#[tauri::command]
pub fn rotate_left(queue: State<SharedCommandQueue>) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::RotateLeft)
}

#[tauri::command]
pub fn rotate_right(queue: State<SharedCommandQueue>) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::RotateRight)
}

#[tauri::command]
pub fn zoom_in(queue: State<SharedCommandQueue>) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::ZoomIn)
}

#[tauri::command]
pub fn zoom_out(queue: State<SharedCommandQueue>) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::ZoomOut)
}

/// Pointer pressed at client coordinates (any button)
#[tauri::command]
pub fn pointer_down(queue: State<SharedCommandQueue>, x: f32, y: f32) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::PointerDown { x, y })
}

#[tauri::command]
pub fn pointer_move(queue: State<SharedCommandQueue>, x: f32, y: f32) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::PointerMove { x, y })
}

#[tauri::command]
pub fn pointer_up(queue: State<SharedCommandQueue>) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::PointerUp)
}

/// Wheel event; only the sign of the vertical delta matters
#[tauri::command]
pub fn wheel(queue: State<SharedCommandQueue>, delta_y: f32) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::Wheel { delta_y })
}

#[tauri::command]
pub fn trigger_animation(queue: State<SharedCommandQueue>) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::TriggerAnimation)
}

#[tauri::command]
pub fn trigger_reverse_animation(queue: State<SharedCommandQueue>) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::TriggerReverseAnimation)
}

#[tauri::command]
pub fn toggle_view(queue: State<SharedCommandQueue>) -> Result<(), ViewerError> {
    enqueue(&queue, PageInput::ToggleView)
}

/// Latest snapshot of the active page
#[tauri::command]
pub fn get_viewer_state(status: State<SharedViewerStatus>) -> Result<ViewerStatus, ViewerError> {
    status.snapshot()
}

/// Get the render resolution
#[tauri::command]
pub fn get_render_size() -> (u32, u32) {
    (RENDER_WIDTH, RENDER_HEIGHT)
}
