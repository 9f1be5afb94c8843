//! Fixed-window admission control.
//!
//! The counter resets once more than [`WINDOW`] has passed since the
//! window opened. Bursts straddling a boundary are not smoothed.

use std::time::{Duration, Instant};

pub const WINDOW: Duration = Duration::from_millis(60_000);

#[derive(Debug, Clone)]
pub struct RateLimiter {
    ceiling: u32,
    count: u32,
    window_start: Instant,
}

impl RateLimiter {
    pub fn new(ceiling: u32) -> Self {
        Self::starting_at(ceiling, Instant::now())
    }

    pub fn starting_at(ceiling: u32, now: Instant) -> Self {
        Self {
            ceiling,
            count: 0,
            window_start: now,
        }
    }

    /// Admit one request if the current window has room.
    pub fn check(&mut self) -> bool {
        self.check_at(Instant::now())
    }

    pub fn check_at(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.window_start) > WINDOW {
            self.count = 0;
            self.window_start = now;
        }

        if self.count >= self.ceiling {
            return false;
        }

        self.count += 1;
        true
    }

    /// Zero the counter and open a new window now.
    pub fn reset(&mut self) {
        self.reset_at(Instant::now());
    }

    pub fn reset_at(&mut self, now: Instant) {
        self.count = 0;
        self.window_start = now;
    }

    /// Requests admitted in the current window.
    pub fn count(&self) -> u32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admits_up_to_ceiling_then_rejects() {
        let start = Instant::now();
        let mut limiter = RateLimiter::starting_at(3, start);
        let t = start + Duration::from_secs(1);

        assert!(limiter.check_at(t));
        assert!(limiter.check_at(t));
        assert!(limiter.check_at(t));
        assert!(!limiter.check_at(t));
        assert_eq!(limiter.count(), 3);
    }

    #[test]
    fn rejection_does_not_increment() {
        let start = Instant::now();
        let mut limiter = RateLimiter::starting_at(1, start);
        assert!(limiter.check_at(start));
        for _ in 0..5 {
            assert!(!limiter.check_at(start + Duration::from_secs(2)));
        }
        assert_eq!(limiter.count(), 1);
    }

    #[test]
    fn window_reset_after_sixty_seconds() {
        let start = Instant::now();
        let mut limiter = RateLimiter::starting_at(2, start);
        assert!(limiter.check_at(start));
        assert!(limiter.check_at(start));
        assert!(!limiter.check_at(start + Duration::from_secs(30)));

        // Exactly 60s is still inside the window.
        assert!(!limiter.check_at(start + WINDOW));

        let later = start + WINDOW + Duration::from_millis(1);
        assert!(limiter.check_at(later));
        assert_eq!(limiter.count(), 1);
    }

    #[test]
    fn window_restarts_at_reset_time() {
        let start = Instant::now();
        let mut limiter = RateLimiter::starting_at(1, start);
        assert!(limiter.check_at(start));

        let reset_time = start + Duration::from_secs(61);
        assert!(limiter.check_at(reset_time));
        // New window opened at reset_time, not at start + 60s.
        assert!(!limiter.check_at(reset_time + Duration::from_secs(59)));
        assert!(limiter.check_at(reset_time + Duration::from_secs(61)));
    }

    #[test]
    fn zero_ceiling_rejects_everything() {
        let start = Instant::now();
        let mut limiter = RateLimiter::starting_at(0, start);
        assert!(!limiter.check_at(start));
        assert!(!limiter.check_at(start + Duration::from_secs(120)));
    }

    #[test]
    fn manual_reset_reopens_window() {
        let start = Instant::now();
        let mut limiter = RateLimiter::starting_at(1, start);
        assert!(limiter.check_at(start));
        assert!(!limiter.check_at(start));

        limiter.reset_at(start + Duration::from_secs(5));
        assert_eq!(limiter.count(), 0);
        assert!(limiter.check_at(start + Duration::from_secs(5)));
    }
}
