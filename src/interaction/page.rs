//! Page controllers
//!
//! Each page owns exactly one controller resource holding every piece of
//! interaction state for that page. Per-frame systems read targets from it
//! at tick time, and dropping it on navigation cancels all of its timers.

use std::time::Duration;

use bevy::prelude::*;

use super::animation::{AnimationState, AnimationTrigger, ClipCommand};
use super::auto_rotate::AutoRotate;
use super::camera_rig::CameraRig;
use super::input::PageInput;
use super::loading::LoadingGate;
use super::tracker::TargetTracker;
use crate::config::{home, model};
use crate::route::Page;
use crate::tauri_bridge::shared_state::ViewerStatus;

/// Values the displayed model eases toward this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelTargets {
    pub rotation: f32,
    pub zoom: f32,
    /// Rotation around the X axis
    pub tilt: f32,
}

pub trait PageController: Resource {
    const PAGE: Page;

    fn handle(&mut self, input: PageInput);

    /// Advances the page's timers by one frame.
    fn advance(&mut self, delta: Duration);

    fn gate(&self) -> &LoadingGate;

    fn gate_mut(&mut self) -> &mut LoadingGate;

    fn targets(&self) -> ModelTargets;

    fn describe(&self, status: &mut ViewerStatus);
}

fn describe_common(
    status: &mut ViewerStatus,
    page: Page,
    tracker: &TargetTracker,
    gate: &LoadingGate,
) {
    status.route = page;
    status.path = page.path().to_owned();
    status.rotation = tracker.rotation();
    status.zoom = tracker.zoom();
    status.loading = gate.loading();
    status.is_loaded = gate.is_loaded();
    status.controls_visible = gate.controls_visible();
    status.error = gate.error().map(str::to_owned);
}

// =============================================================================
// Home page
// =============================================================================

#[derive(Resource, Debug, Clone)]
pub struct HomeController {
    pub tracker: TargetTracker,
    pub auto_rotate: AutoRotate,
    pub camera_rig: CameraRig,
    pub gate: LoadingGate,
}

impl Default for HomeController {
    fn default() -> Self {
        Self::new(home::CAMERA_POSITION.truncate())
    }
}

impl HomeController {
    pub fn new(camera_mount: Vec2) -> Self {
        Self {
            tracker: TargetTracker::new(home::PROFILE),
            auto_rotate: AutoRotate::default(),
            camera_rig: CameraRig::new(camera_mount),
            gate: LoadingGate::default(),
        }
    }

    /// A held drag keeps auto-rotation paused with no countdown; the
    /// countdown starts on release.
    fn pause_auto_rotate(&mut self) {
        if self.tracker.is_dragging() {
            self.auto_rotate.hold();
        } else {
            self.auto_rotate.interrupt();
        }
    }
}

impl PageController for HomeController {
    const PAGE: Page = Page::Home;

    fn handle(&mut self, input: PageInput) {
        match input {
            PageInput::RotateLeft => {
                self.tracker.rotate_left();
                self.pause_auto_rotate();
            }
            PageInput::RotateRight => {
                self.tracker.rotate_right();
                self.pause_auto_rotate();
            }
            PageInput::ZoomIn => {
                self.tracker.zoom_in();
                self.pause_auto_rotate();
            }
            PageInput::ZoomOut => {
                self.tracker.zoom_out();
                self.pause_auto_rotate();
            }
            PageInput::Wheel { delta_y } => {
                if self.tracker.wheel(delta_y) {
                    self.pause_auto_rotate();
                }
            }
            PageInput::PointerDown { x, y } => {
                let pointer = Vec2::new(x, y);
                self.tracker.pointer_down(pointer);
                self.camera_rig.pointer_down(pointer);
                if self.tracker.is_dragging() {
                    self.auto_rotate.hold();
                }
            }
            PageInput::PointerMove { x, y } => {
                let pointer = Vec2::new(x, y);
                if self.tracker.pointer_move(pointer).is_some() {
                    self.camera_rig.pointer_move(pointer);
                    self.auto_rotate.hold();
                }
            }
            PageInput::PointerUp => {
                if self.tracker.pointer_up() {
                    self.camera_rig.pointer_up();
                    self.auto_rotate.interrupt();
                }
            }
            PageInput::TriggerAnimation
            | PageInput::TriggerReverseAnimation
            | PageInput::ToggleView => {
                debug!("{input:?} has no effect on the home page");
            }
        }
    }

    fn advance(&mut self, delta: Duration) {
        let spin = self.auto_rotate.advance(delta);
        self.tracker.nudge(spin);
        if self.gate.tick(delta) {
            info!("Home page controls ready");
        }
    }

    fn gate(&self) -> &LoadingGate {
        &self.gate
    }

    fn gate_mut(&mut self) -> &mut LoadingGate {
        &mut self.gate
    }

    fn targets(&self) -> ModelTargets {
        ModelTargets {
            rotation: self.tracker.rotation(),
            zoom: self.tracker.zoom(),
            tilt: 0.0,
        }
    }

    fn describe(&self, status: &mut ViewerStatus) {
        describe_common(status, Self::PAGE, &self.tracker, &self.gate);
        status.auto_rotating = Some(self.auto_rotate.is_active());
        status.animation = None;
        status.view_tilt = None;
        status.toggle_view_available = false;
    }
}

// =============================================================================
// Model page
// =============================================================================

/// Whether the loaded asset has a clip to drive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClipAvailability {
    /// Asset not inspected yet; triggers are queued
    #[default]
    Unknown,
    Ready,
    /// Triggers are no-ops
    Missing,
}

#[derive(Resource, Debug, Clone)]
pub struct ModelController {
    pub tracker: TargetTracker,
    pub gate: LoadingGate,
    animation: AnimationTrigger,
    pending_clip: Option<ClipCommand>,
    clips: ClipAvailability,
}

impl Default for ModelController {
    fn default() -> Self {
        Self {
            tracker: TargetTracker::new(model::PROFILE),
            gate: LoadingGate::default(),
            animation: AnimationTrigger::default(),
            pending_clip: None,
            clips: ClipAvailability::Unknown,
        }
    }
}

impl ModelController {
    pub fn animation(&self) -> &AnimationTrigger {
        &self.animation
    }

    pub fn clips(&self) -> ClipAvailability {
        self.clips
    }

    pub fn set_clips(&mut self, clips: ClipAvailability) {
        self.clips = clips;
        if clips == ClipAvailability::Missing {
            self.animation.reset();
            self.pending_clip = None;
        }
    }

    /// Clip work queued by the last trigger, taken once by the clip driver.
    pub fn take_clip_command(&mut self) -> Option<ClipCommand> {
        self.pending_clip.take()
    }

    pub fn trigger_animation(&mut self) {
        if self.clips == ClipAvailability::Missing {
            debug!("model has no animation clips, ignoring trigger");
            return;
        }
        if let Some(command) = self.animation.trigger_forward() {
            self.pending_clip = Some(command);
        }
    }

    pub fn trigger_reverse_animation(&mut self) {
        if self.clips == ClipAvailability::Missing {
            debug!("model has no animation clips, ignoring reverse trigger");
            return;
        }
        if let Some(command) = self.animation.trigger_reverse() {
            self.pending_clip = Some(command);
        }
    }

    pub fn toggle_view(&mut self) {
        self.animation.toggle_view();
    }
}

impl PageController for ModelController {
    const PAGE: Page = Page::Model;

    fn handle(&mut self, input: PageInput) {
        match input {
            PageInput::RotateLeft => self.tracker.rotate_left(),
            PageInput::RotateRight => self.tracker.rotate_right(),
            PageInput::ZoomIn => self.tracker.zoom_in(),
            PageInput::ZoomOut => self.tracker.zoom_out(),
            PageInput::TriggerAnimation => self.trigger_animation(),
            PageInput::TriggerReverseAnimation => self.trigger_reverse_animation(),
            PageInput::ToggleView => self.toggle_view(),
            // the model page is steered with its buttons only
            PageInput::PointerDown { .. }
            | PageInput::PointerMove { .. }
            | PageInput::PointerUp
            | PageInput::Wheel { .. } => {}
        }
    }

    fn advance(&mut self, delta: Duration) {
        if self.gate.tick(delta) {
            info!("Model page controls ready");
        }
    }

    fn gate(&self) -> &LoadingGate {
        &self.gate
    }

    fn gate_mut(&mut self) -> &mut LoadingGate {
        &mut self.gate
    }

    fn targets(&self) -> ModelTargets {
        ModelTargets {
            rotation: self.tracker.rotation(),
            zoom: self.tracker.zoom(),
            tilt: self.animation.tilt().angles()[0],
        }
    }

    fn describe(&self, status: &mut ViewerStatus) {
        describe_common(status, Self::PAGE, &self.tracker, &self.gate);
        let state = self.animation.state();
        status.auto_rotating = None;
        status.animation = Some(state);
        status.view_tilt = Some(self.animation.tilt().angles());
        status.toggle_view_available = state == AnimationState::PlayingForward;
    }
}
