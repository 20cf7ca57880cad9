//! Per-frame page bookkeeping: timers, asset readiness, eased model
//! transform and the status snapshot handed to the frontend.

use bevy::{asset::RecursiveDependencyLoadState, prelude::*};

use crate::bevy::components::{EasedModel, PageModel};
use crate::bevy::resources::{PageAsset, ViewerStatusRes};
use crate::interaction::loading::LoadingGate;
use crate::interaction::{HomeController, ModelController, PageController};
use crate::route::Page;
use crate::tauri_bridge::shared_state::ViewerStatus;

/// Advance the active page's timers by this frame's delta
pub fn advance_page<C: PageController>(time: Res<Time>, mut controller: ResMut<C>) {
    controller.advance(time.delta());
}

/// Poll the page asset and open the loading gate once it is usable
pub fn track_asset_readiness<C: PageController>(
    asset_server: Res<AssetServer>,
    asset: Option<Res<PageAsset>>,
    mut controller: ResMut<C>,
) {
    let Some(asset) = asset else { return };
    if !controller.gate().loading() {
        return;
    }

    let state = asset_server.get_recursive_dependency_load_state(&asset.gltf);
    apply_load_state(C::PAGE, controller.gate_mut(), state);
}

fn apply_load_state(
    page: Page,
    gate: &mut LoadingGate,
    state: Option<RecursiveDependencyLoadState>,
) {
    match state {
        Some(RecursiveDependencyLoadState::Loaded) => {
            info!("{page:?} page asset ready");
            gate.mark_ready();
        }
        Some(RecursiveDependencyLoadState::Failed(err)) => {
            error!("{page:?} page asset failed to load: {err}");
            gate.mark_failed(err.to_string());
        }
        _ => {}
    }
}

/// Ease the displayed model toward the controller's targets
pub fn ease_page_model<C: PageController>(
    controller: Res<C>,
    mut models: Query<(&mut Transform, &mut EasedModel), With<PageModel>>,
) {
    let targets = controller.targets();
    for (mut transform, mut eased) in &mut models {
        eased.step(targets);
        transform.rotation = eased.rotation_quat();
        transform.scale = Vec3::splat(eased.scale);
    }
}

/// Publish a snapshot of whichever page is active
pub fn publish_status(
    status: Res<ViewerStatusRes>,
    home: Option<Res<HomeController>>,
    model: Option<Res<ModelController>>,
) {
    let mut snapshot = ViewerStatus::default();
    if let Some(home) = home {
        home.describe(&mut snapshot);
    } else if let Some(model) = model {
        model.describe(&mut snapshot);
    } else {
        // between pages
        return;
    }

    if let Err(err) = status.0.replace(snapshot) {
        warn!("Failed to publish viewer status: {err}");
    }
}
