//! Bevy application setup and execution
//!
//! This module handles the creation and configuration of the Bevy app,
//! including plugin registration and system scheduling.

use bevy::{
    app::{App, ScheduleRunnerPlugin},
    ecs::system::ScheduleSystem,
    prelude::*,
    window::ExitCondition,
};
use std::thread;
use std::time::Duration;

use crate::bevy::plugins::FrameCopyPlugin;
use crate::bevy::resources::*;
use crate::bevy::systems::*;
use crate::config::TARGET_FPS;
use crate::interaction::{HomeController, ModelController, PageController, PageInput};
use crate::route::Page;
use crate::tauri_bridge::shared_state::{
    SharedCommandQueue, SharedFrameBuffer, SharedViewerStatus,
};

/// Per-frame systems every page runs while its controller exists
fn page_systems<C: PageController>() -> impl IntoScheduleConfigs<ScheduleSystem, ()> {
    (
        apply_page_input::<C>,
        advance_page::<C>,
        track_asset_readiness::<C>,
        ease_page_model::<C>,
    )
        .chain()
        .run_if(resource_exists::<C>)
}

/// Create and configure the Bevy application
pub fn create_app(
    frame_buffer: SharedFrameBuffer,
    command_queue: SharedCommandQueue,
    viewer_status: SharedViewerStatus,
) -> App {
    let mut app = App::new();

    // Use DefaultPlugins but configure for headless operation
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: None,
                exit_condition: ExitCondition::DontExit,
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    );

    // Add schedule runner for controlled frame rate
    app.add_plugins(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
        1.0 / TARGET_FPS,
    )));

    // Add custom plugins
    app.add_plugins(FrameCopyPlugin);

    app.init_state::<Page>();
    app.add_message::<PageInput>();

    // Insert resources
    app.insert_resource(FrameBufferRes(frame_buffer));
    app.insert_resource(CommandQueueRes(command_queue));
    app.insert_resource(ViewerStatusRes(viewer_status));

    // Page lifecycle
    app.add_systems(
        OnEnter(Page::Home),
        (ensure_render_target, spawn_home_page).chain(),
    );
    app.add_systems(OnExit(Page::Home), teardown_page::<HomeController>);
    app.add_systems(
        OnEnter(Page::Model),
        (ensure_render_target, spawn_model_page).chain(),
    );
    app.add_systems(OnExit(Page::Model), teardown_page::<ModelController>);

    // Register systems
    app.add_systems(PreUpdate, drain_viewer_commands);
    app.add_systems(
        Update,
        (
            page_systems::<HomeController>(),
            update_camera_rig
                .after(apply_page_input::<HomeController>)
                .run_if(resource_exists::<HomeController>),
            page_systems::<ModelController>(),
            (
                prepare_model_clip.run_if(resource_exists::<PageAsset>),
                (attach_clip_player, drive_model_clip)
                    .chain()
                    .run_if(resource_exists::<ModelClip>),
            )
                .chain()
                .after(apply_page_input::<ModelController>)
                .run_if(resource_exists::<ModelController>),
        ),
    );
    app.add_systems(PostUpdate, publish_status);
    app.add_systems(Last, publish_frames);

    info!("Bevy app configured (headless, {TARGET_FPS} fps)");
    app
}

/// Start Bevy in a background thread
pub fn start_bevy(
    buffer: SharedFrameBuffer,
    command_queue: SharedCommandQueue,
    viewer_status: SharedViewerStatus,
) {
    thread::spawn(move || {
        let mut app = create_app(buffer, command_queue, viewer_status);
        info!("Running render loop");
        app.run();
    });
}
