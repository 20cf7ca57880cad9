//! One-shot clip trigger and view tilt for the model page

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationState {
    #[default]
    Idle,
    PlayingForward,
    PlayingReverse,
}

/// What the clip player has to do after a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipCommand {
    /// From time 0 at speed +1, once, holding the last frame
    PlayForward,
    /// From the clip's end at speed -1, once, holding the first frame
    PlayReverse,
}

/// The two tilt presets of the model page's secondary rotation axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewTilt {
    #[default]
    Upright,
    Leaning,
}

impl ViewTilt {
    pub const fn angles(self) -> [f32; 3] {
        match self {
            ViewTilt::Upright => [FRAC_PI_2, 0.0, 0.0],
            ViewTilt::Leaning => [FRAC_PI_4, 0.0, 0.0],
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            ViewTilt::Upright => ViewTilt::Leaning,
            ViewTilt::Leaning => ViewTilt::Upright,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnimationTrigger {
    state: AnimationState,
    tilt: ViewTilt,
}

impl AnimationTrigger {
    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn tilt(&self) -> ViewTilt {
        self.tilt
    }

    /// Idle|PlayingReverse -> PlayingForward. Already playing forward is a no-op.
    pub fn trigger_forward(&mut self) -> Option<ClipCommand> {
        if self.state == AnimationState::PlayingForward {
            return None;
        }
        self.state = AnimationState::PlayingForward;
        Some(ClipCommand::PlayForward)
    }

    /// Any state -> PlayingReverse; always puts the tilt back upright.
    pub fn trigger_reverse(&mut self) -> Option<ClipCommand> {
        self.tilt = ViewTilt::Upright;
        if self.state == AnimationState::PlayingReverse {
            return None;
        }
        self.state = AnimationState::PlayingReverse;
        Some(ClipCommand::PlayReverse)
    }

    pub fn toggle_view(&mut self) {
        self.tilt = self.tilt.toggled();
    }

    /// Back to rest, e.g. when the asset turns out to have no clips.
    pub fn reset(&mut self) {
        self.state = AnimationState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_then_reverse_leaves_only_reverse() {
        let mut trigger = AnimationTrigger::default();
        assert_eq!(trigger.trigger_forward(), Some(ClipCommand::PlayForward));
        trigger.toggle_view();
        assert_eq!(trigger.tilt().angles(), [FRAC_PI_4, 0.0, 0.0]);

        assert_eq!(trigger.trigger_reverse(), Some(ClipCommand::PlayReverse));
        assert_eq!(trigger.state(), AnimationState::PlayingReverse);
        assert_eq!(trigger.tilt().angles(), [FRAC_PI_2, 0.0, 0.0]);
    }

    #[test]
    fn reverse_cancels_into_forward_again() {
        let mut trigger = AnimationTrigger::default();
        trigger.trigger_reverse();
        assert_eq!(trigger.trigger_forward(), Some(ClipCommand::PlayForward));
        assert_eq!(trigger.state(), AnimationState::PlayingForward);
    }

    #[test]
    fn retriggering_same_direction_keeps_clip_running() {
        let mut trigger = AnimationTrigger::default();
        trigger.trigger_forward();
        assert_eq!(trigger.trigger_forward(), None);

        trigger.trigger_reverse();
        trigger.toggle_view();
        assert_eq!(trigger.trigger_reverse(), None);
        assert_eq!(trigger.tilt(), ViewTilt::Upright);
    }

    #[test]
    fn toggle_is_independent_of_animation_state() {
        let mut trigger = AnimationTrigger::default();
        trigger.toggle_view();
        assert_eq!(trigger.tilt(), ViewTilt::Leaning);
        assert_eq!(trigger.state(), AnimationState::Idle);
        trigger.toggle_view();
        assert_eq!(trigger.tilt(), ViewTilt::Upright);
    }
}
