//! Model page clip playback
//!
//! The first clip of the model page's glTF is wrapped in a one-node
//! animation graph, attached to the scene's `AnimationPlayer` once it
//! spawns, and played once per trigger in either direction.

use std::time::Duration;

use bevy::{
    animation::RepeatAnimation,
    gltf::Gltf,
    prelude::*,
};

use crate::bevy::resources::{ModelClip, PageAsset};
use crate::interaction::animation::ClipCommand;
use crate::interaction::{ClipAvailability, ModelController};

/// State of the first clip a glTF exposes
#[derive(Debug)]
enum ClipLookup {
    /// The asset has no animations at all
    Missing,
    /// Listed but not in `Assets<AnimationClip>` yet
    Pending,
    Found {
        handle: Handle<AnimationClip>,
        duration: Duration,
    },
}

fn lookup_first_clip(
    animations: &[Handle<AnimationClip>],
    clips: &Assets<AnimationClip>,
) -> ClipLookup {
    let Some(handle) = animations.first() else {
        return ClipLookup::Missing;
    };
    match clips.get(handle) {
        Some(clip) => ClipLookup::Found {
            handle: handle.clone(),
            duration: Duration::from_secs_f32(clip.duration().max(0.0)),
        },
        None => ClipLookup::Pending,
    }
}

/// Inspect the loaded glTF for a clip and build its animation graph
pub fn prepare_model_clip(
    mut commands: Commands,
    asset: Res<PageAsset>,
    gltfs: Res<Assets<Gltf>>,
    clips: Res<Assets<AnimationClip>>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
    mut controller: ResMut<ModelController>,
) {
    if controller.clips() != ClipAvailability::Unknown {
        return;
    }
    let Some(gltf) = gltfs.get(&asset.gltf) else {
        return;
    };

    match lookup_first_clip(&gltf.animations, &clips) {
        ClipLookup::Missing => {
            warn!("Model has no animation clips; animation controls are disabled");
            controller.set_clips(ClipAvailability::Missing);
        }
        ClipLookup::Pending => {}
        ClipLookup::Found { handle, duration } => {
            let (graph, node) = AnimationGraph::from_clip(handle);
            commands.insert_resource(ModelClip {
                graph: graphs.add(graph),
                node,
                duration,
                player: None,
            });
            controller.set_clips(ClipAvailability::Ready);
            info!("Model clip ready ({:.2}s)", duration.as_secs_f32());
        }
    }
}

/// Hand the clip's graph to the scene's animation player
pub fn attach_clip_player(
    mut commands: Commands,
    mut clip: ResMut<ModelClip>,
    players: Query<Entity, (With<AnimationPlayer>, Without<AnimationGraphHandle>)>,
) {
    if clip.player.is_some() {
        return;
    }
    let Some(player) = players.iter().next() else {
        return;
    };
    commands
        .entity(player)
        .insert(AnimationGraphHandle(clip.graph.clone()));
    clip.player = Some(player);
    debug!("Attached model clip to {player}");
}

/// Apply the controller's pending clip command
pub fn drive_model_clip(
    clip: Res<ModelClip>,
    mut controller: ResMut<ModelController>,
    mut players: Query<&mut AnimationPlayer>,
) {
    // keep the command queued until the player exists
    let Some(entity) = clip.player else { return };
    let Ok(mut player) = players.get_mut(entity) else {
        return;
    };
    let Some(command) = controller.take_clip_command() else {
        return;
    };

    let active = player.play(clip.node);
    active.replay();
    match command {
        ClipCommand::PlayForward => {
            active.set_repeat(RepeatAnimation::Never).set_speed(1.0);
        }
        ClipCommand::PlayReverse => {
            active
                .set_repeat(RepeatAnimation::Never)
                .set_speed(-1.0)
                .seek_to(clip.duration.as_secs_f32());
        }
    }
    debug!("Model clip {command:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{PageController, PageInput};

    const CLIP_LENGTH: Duration = Duration::from_millis(2500);

    fn clip_app() -> App {
        let mut clip = AnimationClip::default();
        clip.set_duration(CLIP_LENGTH.as_secs_f32());
        let mut clips = Assets::<AnimationClip>::default();
        let (_, node) = AnimationGraph::from_clip(clips.add(clip));

        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(ModelController::default())
            .insert_resource(ModelClip {
                graph: Handle::default(),
                node,
                duration: CLIP_LENGTH,
                player: None,
            })
            .add_systems(Update, (attach_clip_player, drive_model_clip).chain());
        app
    }

    fn trigger(app: &mut App, input: PageInput) {
        app.world_mut().resource_mut::<ModelController>().handle(input);
    }

    fn active(app: &App, player: Entity) -> &bevy::animation::ActiveAnimation {
        let node = app.world().resource::<ModelClip>().node;
        app.world()
            .get::<AnimationPlayer>(player)
            .unwrap()
            .animation(node)
            .unwrap()
    }

    #[test]
    fn trigger_waits_for_the_player() {
        let mut app = clip_app();
        trigger(&mut app, PageInput::TriggerAnimation);
        app.update();
        assert!(app.world().resource::<ModelClip>().player.is_none());

        let player = app.world_mut().spawn(AnimationPlayer::default()).id();
        app.update();

        assert_eq!(app.world().resource::<ModelClip>().player, Some(player));
        assert!(app.world().get::<AnimationGraphHandle>(player).is_some());
        assert_eq!(
            app.world_mut()
                .resource_mut::<ModelController>()
                .take_clip_command(),
            None,
            "command consumed once the player exists"
        );
        assert_eq!(active(&app, player).speed(), 1.0);
    }

    #[test]
    fn forward_plays_once_from_the_start() {
        let mut app = clip_app();
        let player = app.world_mut().spawn(AnimationPlayer::default()).id();
        app.update();

        trigger(&mut app, PageInput::TriggerAnimation);
        app.update();

        let active = active(&app, player);
        assert_eq!(active.speed(), 1.0);
        assert_eq!(active.seek_time(), 0.0);
        assert_eq!(active.repeat_mode(), RepeatAnimation::Never);
    }

    #[test]
    fn reverse_plays_once_from_the_end() {
        let mut app = clip_app();
        let player = app.world_mut().spawn(AnimationPlayer::default()).id();
        trigger(&mut app, PageInput::TriggerAnimation);
        app.update();

        trigger(&mut app, PageInput::TriggerReverseAnimation);
        app.update();

        let active = active(&app, player);
        assert_eq!(active.speed(), -1.0);
        assert_eq!(active.seek_time(), CLIP_LENGTH.as_secs_f32());
        assert_eq!(active.repeat_mode(), RepeatAnimation::Never);
    }

    #[test]
    fn asset_without_animations_has_no_clip() {
        let clips = Assets::<AnimationClip>::default();
        assert!(matches!(lookup_first_clip(&[], &clips), ClipLookup::Missing));
    }

    #[test]
    fn first_clip_is_pending_until_loaded() {
        let mut clips = Assets::<AnimationClip>::default();
        let mut clip = AnimationClip::default();
        clip.set_duration(1.5);
        let loaded = clips.add(clip);
        let unloaded = Handle::<AnimationClip>::default();

        assert!(matches!(
            lookup_first_clip(&[unloaded, loaded.clone()], &clips),
            ClipLookup::Pending
        ));
        match lookup_first_clip(&[loaded.clone()], &clips) {
            ClipLookup::Found { handle, duration } => {
                assert_eq!(handle, loaded);
                assert_eq!(duration, Duration::from_millis(1500));
            }
            other => panic!("expected the clip, got {other:?}"),
        }
    }
}
