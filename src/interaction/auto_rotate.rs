//! Ambient auto-rotation for the home page
//!
//! Active: adds a small increment to the target rotation on a fixed tick.
//! Paused: nothing happens until the resume countdown expires. Every
//! interaction pauses immediately and restarts the single countdown.

use std::time::Duration;

use bevy::log::debug;
use bevy::time::{Timer, TimerMode};

use super::debounce::Debounce;
use crate::config::auto_rotate::{RESUME_DELAY, STEP, TICK_PERIOD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AutoRotatePhase {
    Active,
    Paused,
}

#[derive(Debug, Clone)]
pub struct AutoRotate {
    phase: AutoRotatePhase,
    tick: Timer,
    step: f32,
    resume: Debounce,
}

impl Default for AutoRotate {
    fn default() -> Self {
        Self::new(TICK_PERIOD, STEP, RESUME_DELAY)
    }
}

impl AutoRotate {
    pub fn new(tick_period: Duration, step: f32, resume_delay: Duration) -> Self {
        Self {
            phase: AutoRotatePhase::Active,
            tick: Timer::new(tick_period, TimerMode::Repeating),
            step,
            resume: Debounce::new(resume_delay),
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == AutoRotatePhase::Active
    }

    pub fn resume_pending(&self) -> bool {
        self.resume.is_pending()
    }

    /// Pauses and (re)starts the resume countdown.
    pub fn interrupt(&mut self) {
        self.phase = AutoRotatePhase::Paused;
        self.resume.arm();
    }

    /// Pauses with no countdown, for as long as a drag is held.
    pub fn hold(&mut self) {
        self.phase = AutoRotatePhase::Paused;
        self.resume.cancel();
    }

    /// Advances both timers by a frame delta and returns the rotation to add.
    pub fn advance(&mut self, delta: Duration) -> f32 {
        if self.resume.tick(delta) {
            debug!("auto-rotation resumed");
            self.phase = AutoRotatePhase::Active;
            self.tick.reset();
            return 0.0;
        }
        match self.phase {
            AutoRotatePhase::Active => {
                self.tick.tick(delta);
                self.tick.times_finished_this_tick() as f32 * self.step
            }
            AutoRotatePhase::Paused => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn active_adds_one_step_per_tick() {
        let mut auto = AutoRotate::default();
        assert!(auto.is_active());
        let spin = auto.advance(Duration::from_millis(48));
        assert!((spin - 3.0 * STEP).abs() < 1e-7);
        assert_eq!(auto.advance(Duration::from_millis(8)), 0.0);
        assert!((auto.advance(Duration::from_millis(8)) - STEP).abs() < 1e-7);
    }

    #[test]
    fn interaction_pauses_immediately() {
        let mut auto = AutoRotate::default();
        auto.interrupt();
        assert!(!auto.is_active());
        assert_eq!(auto.advance(FRAME), 0.0);
    }

    #[test]
    fn burst_of_interactions_resumes_once() {
        let mut auto = AutoRotate::default();
        let mut resumes = 0;

        auto.interrupt();
        let mut was_active = auto.is_active();
        for frame in 0..1_000u32 {
            // second interaction 1.6s after the first
            if frame == 100 {
                auto.interrupt();
            }
            auto.advance(FRAME);
            if auto.is_active() && !was_active {
                resumes += 1;
            }
            was_active = auto.is_active();
        }
        assert_eq!(resumes, 1);
        assert!(auto.is_active());
    }

    #[test]
    fn resume_waits_for_full_quiet_period() {
        let mut auto = AutoRotate::default();
        auto.interrupt();
        auto.advance(Duration::from_millis(2999));
        assert!(!auto.is_active());
        auto.advance(Duration::from_millis(1));
        assert!(auto.is_active());
        assert!(!auto.resume_pending());
    }

    #[test]
    fn hold_never_resumes_on_its_own() {
        let mut auto = AutoRotate::default();
        auto.interrupt();
        auto.advance(Duration::from_millis(1000));
        auto.hold();
        for _ in 0..1_000 {
            auto.advance(FRAME);
        }
        assert!(!auto.is_active());
        auto.interrupt();
        auto.advance(RESUME_DELAY);
        assert!(auto.is_active());
    }
}
