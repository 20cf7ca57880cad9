//! Model Viewer: a two-page interactive 3D viewer
//!
//! A Tauri window hosts a small web page; every pixel of the 3D view is
//! rendered by a headless Bevy app and streamed to the page as frames.
//!
//! Architecture:
//! - Bevy runs in a background thread with NO window (true headless mode)
//! - A RenderGraph node copies the offscreen target into a mapped buffer
//! - GPU texture -> Buffer -> CPU channel -> shared frame buffer -> `frame://`
//! - The page sends input through Tauri commands; Bevy drains them once per
//!   frame and publishes a `ViewerStatus` snapshot back
//!
//! Pages:
//! - `/`: building viewer with ambient auto-rotation and a drag-to-pan camera
//! - `/modelpage`: TIPO-B viewer with a one-shot clip and a view tilt toggle
//!
//! # Module Structure
//!
//! - `config`: Configuration constants and settings
//! - `error`: Error type returned by Tauri commands
//! - `route`: The two pages and their paths
//! - `interaction`: Engine-agnostic interaction state machines
//! - `tauri_bridge`: Bridge layer between Tauri and Bevy
//!   - `shared_state`: Thread-safe data structures
//!   - `commands`: Tauri command handlers
//!   - `protocol`: Custom protocol handlers
//! - `bevy`: Bevy engine integration
//!   - `components`: ECS components
//!   - `resources`: Global resources
//!   - `plugins`: Custom plugins
//!   - `systems`: Page systems
//!   - `app`: Application setup

// Module declarations
mod bevy;
mod config;
mod error;
mod interaction;
mod route;
mod tauri_bridge;

use tauri_bridge::{SharedCommandQueue, SharedFrameBuffer, SharedViewerStatus};

/// Main entry point for the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Create shared state
    let buffer = SharedFrameBuffer::default();
    let command_queue = SharedCommandQueue::default();
    let viewer_status = SharedViewerStatus::default();

    // Start Bevy in background thread; the page polls `state` until the
    // first snapshot arrives, so there is nothing to wait for here
    bevy::start_bevy(buffer.clone(), command_queue.clone(), viewer_status.clone());

    // Clone for the custom protocol handler
    let protocol_buffer = buffer.clone();
    let protocol_status = viewer_status.clone();

    // Build and run Tauri application
    tauri::Builder::default()
        .manage(buffer)
        .manage(command_queue)
        .manage(viewer_status)
        // Register custom protocol "frame://" for direct binary transfer
        .register_asynchronous_uri_scheme_protocol("frame", move |_ctx, request, responder| {
            let buffer = protocol_buffer.clone();
            let status = protocol_status.clone();

            // JPEG encoding is too slow for the protocol thread
            std::thread::spawn(move || {
                // For Tauri v2, URL format is: http://frame.localhost/path
                let response = tauri_bridge::protocol::handle_frame_protocol(
                    request.uri().path(),
                    &buffer,
                    &status,
                );
                responder.respond(response);
            });
        })
        .invoke_handler(tauri::generate_handler![
            tauri_bridge::commands::navigate,
            tauri_bridge::commands::rotate_left,
            tauri_bridge::commands::rotate_right,
            tauri_bridge::commands::zoom_in,
            tauri_bridge::commands::zoom_out,
            tauri_bridge::commands::pointer_down,
            tauri_bridge::commands::pointer_move,
            tauri_bridge::commands::pointer_up,
            tauri_bridge::commands::wheel,
            tauri_bridge::commands::trigger_animation,
            tauri_bridge::commands::trigger_reverse_animation,
            tauri_bridge::commands::toggle_view,
            tauri_bridge::commands::get_viewer_state,
            tauri_bridge::commands::get_render_size
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
