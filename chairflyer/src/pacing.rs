// pacing.rs - wall-clock generation cadence, decoupled from the render rate

use std::time::{Duration, Instant};

/// Fires at most once per interval. The caller supplies `now`, which keeps
/// the cadence testable without sleeping.
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    interval: Duration,
    last: Instant,
}

impl Cadence {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// True when a full interval has elapsed since the last due tick.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Restarts the interval, e.g. when leaving pause.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }
}
