//! Bevy resource definitions
//!
//! This module contains all global resources used by Bevy systems.
//! Resources are singleton data that can be accessed by any system.

use bevy::{animation::graph::AnimationNodeIndex, gltf::Gltf, prelude::*};
use crossbeam_channel::{Receiver, Sender};
use std::time::Duration;

use crate::tauri_bridge::shared_state::{
    SharedCommandQueue, SharedFrameBuffer, SharedViewerStatus,
};

// =============================================================================
// Bridge
// =============================================================================

/// Commands queued by the frontend
#[derive(Resource, Clone)]
pub struct CommandQueueRes(pub SharedCommandQueue);

/// Snapshot published for the frontend after every frame
#[derive(Resource, Clone)]
pub struct ViewerStatusRes(pub SharedViewerStatus);

/// Shared frame buffer resource for Bevy
#[derive(Resource, Clone)]
pub struct FrameBufferRes(pub SharedFrameBuffer);

// =============================================================================
// Rendering
// =============================================================================

/// Handle to the offscreen render target texture
#[derive(Resource)]
pub struct RenderTargetHandle(pub Handle<Image>);

// =============================================================================
// Page assets
// =============================================================================

/// The glTF file backing the active page, polled for readiness
#[derive(Resource)]
pub struct PageAsset {
    pub gltf: Handle<Gltf>,
}

/// The model page's first animation clip, wired to its player
#[derive(Resource)]
pub struct ModelClip {
    pub graph: Handle<AnimationGraph>,
    pub node: AnimationNodeIndex,
    pub duration: Duration,
    /// Filled in once the spawned scene exposes its `AnimationPlayer`
    pub player: Option<Entity>,
}

// =============================================================================
// Channel Communication (Main World <-> Render World)
// =============================================================================

/// Receives data from render world
#[derive(Resource, Deref)]
pub struct MainWorldReceiver(pub Receiver<Vec<u8>>);

/// Sends data to main world
#[derive(Resource, Deref)]
pub struct RenderWorldSender(pub Sender<Vec<u8>>);
