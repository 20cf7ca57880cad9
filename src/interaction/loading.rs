//! Two-stage loading gate
//!
//! `loading` clears when the asset reports ready; `is_loaded` follows only
//! after the grace delay measured from that moment. A failed load is
//! terminal and kept apart from "still loading".

use std::time::Duration;

use super::debounce::Debounce;
use crate::config::loading::GRACE_DELAY;

#[derive(Debug, Clone, PartialEq)]
enum GatePhase {
    Loading,
    Grace,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct LoadingGate {
    phase: GatePhase,
    grace: Debounce,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(GRACE_DELAY)
    }
}

impl LoadingGate {
    pub fn new(grace: Duration) -> Self {
        Self {
            phase: GatePhase::Loading,
            grace: Debounce::new(grace),
        }
    }

    /// Asset not ready yet
    pub fn loading(&self) -> bool {
        self.phase == GatePhase::Loading
    }

    /// Grace period elapsed after the asset became ready
    pub fn is_loaded(&self) -> bool {
        self.phase == GatePhase::Loaded
    }

    pub fn controls_visible(&self) -> bool {
        !self.loading() && self.is_loaded()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            GatePhase::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn mark_ready(&mut self) {
        if self.phase == GatePhase::Loading {
            self.phase = GatePhase::Grace;
            self.grace.arm();
        }
    }

    pub fn mark_failed(&mut self, reason: impl Into<String>) {
        self.grace.cancel();
        self.phase = GatePhase::Failed(reason.into());
    }

    /// Returns `true` on the frame the controls become visible.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if self.phase == GatePhase::Grace && self.grace.tick(delta) {
            self.phase = GatePhase::Loaded;
            return true;
        }
        false
    }
}
