use serde::{Deserialize, Serialize};

/// Pausable one-second countdown, clamped at zero.
///
/// This is only the timer *state*; the periodic task that calls [`tick`]
/// once per second is owned by the view layer, which arms it while
/// [`is_running`] holds and cancels it on pause, submission, or unmount.
///
/// [`tick`]: Countdown::tick
/// [`is_running`]: Countdown::is_running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining_secs: u32,
    paused: bool,
}

impl Countdown {
    /// Starts a countdown at `duration_secs`, running.
    #[must_use]
    pub fn new(duration_secs: u32) -> Self {
        Self {
            remaining_secs: duration_secs,
            paused: false,
        }
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// True while the countdown should be driven by a periodic tick.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.paused && self.remaining_secs > 0
    }

    /// Applies one elapsed second. A no-op when paused or already at zero.
    pub fn tick(&mut self) {
        if self.is_running() {
            self.remaining_secs -= 1;
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_decrement_by_one() {
        let mut countdown = Countdown::new(10);
        for expected in (0..10).rev() {
            countdown.tick();
            assert_eq!(countdown.remaining_secs(), expected);
        }
    }

    #[test]
    fn clamps_at_zero() {
        let mut countdown = Countdown::new(2);
        for _ in 0..5 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining_secs(), 0);
        assert!(countdown.is_expired());
        assert!(!countdown.is_running());
    }

    #[test]
    fn pause_suspends_decrement() {
        let mut countdown = Countdown::new(100);
        countdown.tick();
        countdown.pause();
        for _ in 0..10 {
            countdown.tick();
        }
        assert_eq!(countdown.remaining_secs(), 99);

        countdown.resume();
        countdown.tick();
        assert_eq!(countdown.remaining_secs(), 98);
    }

    #[test]
    fn toggle_flips_paused() {
        let mut countdown = Countdown::new(5);
        assert!(countdown.is_running());
        countdown.toggle();
        assert!(countdown.is_paused());
        countdown.toggle();
        assert!(countdown.is_running());
    }

    #[test]
    fn k_ticks_from_t_leaves_max_zero_t_minus_k() {
        let t = 10_800_u32;
        let k = 3_600_u32;
        let mut countdown = Countdown::new(t);
        for _ in 0..k {
            countdown.tick();
        }
        assert_eq!(countdown.remaining_secs(), t - k);
    }
}
