//! Page scene setup and teardown
//!
//! Entering a page spawns its camera, lights and glTF scene, all scoped to
//! the page state, and inserts a fresh controller. Leaving it drops the
//! controller together with every timer it owns.

use bevy::{
    asset::Assets,
    camera::RenderTarget,
    core_pipeline::tonemapping::Tonemapping,
    ecs::message::Messages,
    gltf::Gltf,
    image::Image,
    prelude::*,
    render::{
        render_resource::{Extent3d, TextureFormat, TextureUsages},
        renderer::RenderDevice,
    },
};

use crate::bevy::components::{EasedModel, PageCamera, PageModel};
use crate::bevy::plugins::FrameCopier;
use crate::bevy::resources::{ModelClip, PageAsset, RenderTargetHandle};
use crate::config::{home, model, RENDER_HEIGHT, RENDER_WIDTH};
use crate::interaction::{HomeController, ModelController, PageController, PageInput};
use crate::route::Page;

/// Create the offscreen render target and its frame copier once
///
/// Runs ahead of the first page's `OnEnter`, which fires before `Startup`.
pub fn ensure_render_target(
    mut commands: Commands,
    existing: Option<Res<RenderTargetHandle>>,
    mut images: ResMut<Assets<Image>>,
    render_device: Res<RenderDevice>,
) {
    if existing.is_some() {
        return;
    }

    let size = Extent3d {
        width: RENDER_WIDTH,
        height: RENDER_HEIGHT,
        depth_or_array_layers: 1,
    };

    let mut render_target_image =
        Image::new_target_texture(size.width, size.height, TextureFormat::bevy_default());
    render_target_image.texture_descriptor.usage |= TextureUsages::COPY_SRC;
    let render_target_image_handle = images.add(render_target_image);

    commands.insert_resource(RenderTargetHandle(render_target_image_handle.clone()));
    commands.spawn(FrameCopier::new(render_target_image_handle, size, &render_device));

    info!("Render target created ({RENDER_WIDTH}x{RENDER_HEIGHT})");
}

fn page_camera(
    target: &RenderTargetHandle,
    clear_color: Color,
    ambient_brightness: f32,
    transform: Transform,
) -> impl Bundle {
    (
        Camera3d::default(),
        Camera {
            target: RenderTarget::Image(target.0.clone().into()),
            clear_color: ClearColorConfig::Custom(clear_color),
            ..default()
        },
        Tonemapping::None,
        AmbientLight {
            brightness: ambient_brightness,
            ..default()
        },
        transform,
        PageCamera,
    )
}

/// Spawn the building viewer
pub fn spawn_home_page(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    target: Res<RenderTargetHandle>,
) {
    info!("Entering home page");

    let controller = HomeController::default();
    let targets = controller.targets();

    commands.insert_resource(PageAsset {
        gltf: asset_server.load::<Gltf>(home::MODEL_ASSET),
    });

    commands.spawn((
        page_camera(
            &target,
            home::CLEAR_COLOR,
            home::AMBIENT_BRIGHTNESS,
            Transform::from_translation(home::CAMERA_POSITION)
                .looking_at(home::CAMERA_LOOK_AT, Vec3::Y),
        ),
        DespawnOnExit(Page::Home),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: home::DIRECTIONAL_ILLUMINANCE,
            ..default()
        },
        Transform::from_translation(home::DIRECTIONAL_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        DespawnOnExit(Page::Home),
    ));

    commands.spawn((
        SpotLight {
            intensity: home::SPOT_INTENSITY,
            range: 60.0,
            ..default()
        },
        Transform::from_translation(home::SPOT_POSITION)
            .looking_at(home::MODEL_POSITION, Vec3::Y),
        DespawnOnExit(Page::Home),
    ));

    // the building starts where the controller wants it
    let eased = EasedModel {
        rotation: targets.rotation,
        scale: targets.zoom,
        tilt: targets.tilt,
        rotation_easing: home::ROTATION_EASING,
        scale_easing: home::SCALE_EASING,
        tilt_easing: home::ROTATION_EASING,
    };
    commands.spawn((
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(home::MODEL_ASSET))),
        Transform::from_translation(home::MODEL_POSITION)
            .with_rotation(eased.rotation_quat())
            .with_scale(Vec3::splat(eased.scale)),
        eased,
        PageModel,
        DespawnOnExit(Page::Home),
    ));

    commands.insert_resource(controller);
}

/// Spawn the animated model viewer
pub fn spawn_model_page(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    target: Res<RenderTargetHandle>,
) {
    info!("Entering model page");

    commands.insert_resource(PageAsset {
        gltf: asset_server.load::<Gltf>(model::MODEL_ASSET),
    });

    commands.spawn((
        page_camera(
            &target,
            model::CLEAR_COLOR,
            model::AMBIENT_BRIGHTNESS,
            Transform::from_translation(model::CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        ),
        DespawnOnExit(Page::Model),
    ));

    let controller = ModelController::default();
    let targets = controller.targets();

    // eases in from a larger scale and no tilt
    let eased = EasedModel {
        rotation: targets.rotation,
        scale: model::INITIAL_DISPLAY_SCALE,
        tilt: 0.0,
        rotation_easing: model::ROTATION_EASING,
        scale_easing: model::SCALE_EASING,
        tilt_easing: model::TILT_EASING,
    };
    commands.spawn((
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(model::MODEL_ASSET))),
        Transform::from_rotation(eased.rotation_quat()).with_scale(Vec3::splat(eased.scale)),
        eased,
        PageModel,
        DespawnOnExit(Page::Model),
    ));

    commands.insert_resource(controller);
}

/// Drop the leaving page's controller, its asset bookkeeping and any
/// inputs still buffered for it
///
/// Each page reads `PageInput` through its own cursor, so a backlog left
/// here would be replayed into the next page's fresh controller.
pub fn teardown_page<C: PageController>(
    mut commands: Commands,
    mut inputs: ResMut<Messages<PageInput>>,
) {
    info!("Leaving {:?} page", C::PAGE);
    inputs.clear();
    commands.remove_resource::<C>();
    commands.remove_resource::<PageAsset>();
    commands.remove_resource::<ModelClip>();
}
