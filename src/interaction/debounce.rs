//! Debounced single-shot timer
//!
//! Re-arming replaces the pending countdown instead of stacking a second
//! one, so a burst of interactions produces exactly one expiry.

use std::time::Duration;

use bevy::time::{Timer, TimerMode};

#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    pending: Option<Timer>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Starts the countdown, discarding any countdown already running.
    pub fn arm(&mut self) {
        self.pending = Some(Timer::new(self.delay, TimerMode::Once));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Advances the countdown by `delta`. Returns `true` exactly once, on
    /// the tick the countdown expires; the timer is disarmed afterwards.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(timer) = self.pending.as_mut() else {
            return false;
        };
        if timer.tick(delta).just_finished() {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(3000);

    #[test]
    fn fires_once_after_delay() {
        let mut timer = Debounce::new(DELAY);
        assert!(!timer.tick(Duration::from_secs(10)), "idle timer fired");

        timer.arm();
        assert!(!timer.tick(Duration::from_millis(2999)));
        assert!(timer.tick(Duration::from_millis(1)));
        assert!(!timer.is_pending());
        assert!(!timer.tick(Duration::from_secs(10)));
    }

    #[test]
    fn rearming_restarts_the_countdown() {
        let mut timer = Debounce::new(DELAY);
        let mut fired = 0;

        timer.arm();
        fired += timer.tick(Duration::from_millis(2000)) as u32;
        timer.arm();
        fired += timer.tick(Duration::from_millis(2000)) as u32;
        assert_eq!(fired, 0, "first countdown should have been replaced");
        assert!(timer.is_pending());
        assert!(!timer.tick(Duration::from_millis(999)));
        fired += timer.tick(Duration::from_millis(1)) as u32;
        assert_eq!(fired, 1);
        assert!(!timer.is_pending());

        for _ in 0..10 {
            fired += timer.tick(Duration::from_millis(500)) as u32;
        }
        assert_eq!(fired, 1, "a fired countdown stays disarmed");
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut timer = Debounce::new(DELAY);
        timer.arm();
        timer.tick(Duration::from_millis(2500));
        timer.cancel();
        assert!(!timer.tick(Duration::from_secs(5)));
        assert!(!timer.is_pending());
    }
}
