//! Auto-advance scheduler.
//!
//! A single optional deadline, re-armed from scratch on every state change
//! that matters to the slider (index, category, lightbox). The host drives
//! it by passing the current instant; nothing here reads a clock or spawns a
//! thread, so a dropped scheduler can never fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Autoplay {
    /// A disarmed scheduler with the given period.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next advance is due, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Start a fresh interval at `now`, discarding any pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Consume the pending deadline if it has passed.
    ///
    /// Returns `true` at most once per armed interval no matter how late the
    /// tick is; the scheduler is left disarmed and the caller re-arms it.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: Duration = Duration::from_secs(5);

    #[test]
    fn starts_disarmed() {
        let mut autoplay = Autoplay::new(FIVE);
        assert!(!autoplay.is_armed());
        assert!(!autoplay.take_due(Instant::now() + FIVE * 10));
    }

    #[test]
    fn fires_at_deadline_not_before() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(FIVE);
        autoplay.arm(t0);
        assert!(!autoplay.take_due(t0 + Duration::from_millis(4999)));
        assert!(autoplay.take_due(t0 + FIVE));
    }

    #[test]
    fn late_tick_fires_once() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(FIVE);
        autoplay.arm(t0);
        let late = t0 + FIVE * 7;
        assert!(autoplay.take_due(late));
        assert!(!autoplay.take_due(late));
    }

    #[test]
    fn rearm_restarts_interval() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(FIVE);
        autoplay.arm(t0);
        autoplay.arm(t0 + Duration::from_secs(4));
        assert!(!autoplay.take_due(t0 + FIVE));
        assert_eq!(autoplay.deadline(), Some(t0 + Duration::from_secs(9)));
    }

    #[test]
    fn disarm_cancels() {
        let t0 = Instant::now();
        let mut autoplay = Autoplay::new(FIVE);
        autoplay.arm(t0);
        autoplay.disarm();
        assert!(!autoplay.take_due(t0 + FIVE));
    }
}
