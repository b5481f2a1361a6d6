//! Clock module - converts elapsed time and level into a drop cadence
//!
//! The caller decides how often to call [`DropClock::advance`]; nothing here owns a
//! timer or sleeps. Frame rate and gravity are therefore independent.

use std::time::Duration;

/// Gravity timer with a clamped, monotonically shrinking interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropClock {
    accumulated: Duration,
    interval: Duration,
    min_interval: Duration,
}

impl DropClock {
    /// Create a clock; `interval` is clamped up to `min_interval`
    pub fn new(interval: Duration, min_interval: Duration) -> Self {
        Self {
            accumulated: Duration::ZERO,
            interval: interval.max(min_interval),
            min_interval,
        }
    }

    /// Accumulate elapsed time; returns true (and resets the accumulator) when a drop is due.
    ///
    /// At most one drop is reported per call, however large `elapsed` is.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    /// Shorten the interval by `amount`, never below the floor
    pub fn speed_up(&mut self, amount: Duration) {
        self.interval = self
            .interval
            .saturating_sub(amount)
            .max(self.min_interval);
    }

    /// Current drop interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Time accumulated towards the next drop
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }
}
