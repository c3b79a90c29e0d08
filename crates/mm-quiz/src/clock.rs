//! Monotonic time sources for session timing.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A monotonic clock. Only differences between readings matter.
pub trait Clock {
    /// Time elapsed since some fixed origin.
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Start a clock at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that returns a fixed sequence of readings.
///
/// Once the sequence runs out the last reading repeats, so time stands
/// still rather than going backwards.
#[derive(Debug, Default)]
pub struct ScriptedClock {
    readings: RefCell<VecDeque<Duration>>,
    last: Cell<Duration>,
}

impl ScriptedClock {
    /// Create a clock from readings in whole seconds.
    pub fn from_secs<I: IntoIterator<Item = u64>>(readings: I) -> Self {
        Self {
            readings: RefCell::new(readings.into_iter().map(Duration::from_secs).collect()),
            last: Cell::new(Duration::ZERO),
        }
    }

    /// A clock that starts at `start` and moves `step` seconds per reading,
    /// for `count` readings.
    pub fn stepping(start: u64, step: u64, count: usize) -> Self {
        Self::from_secs((0..count as u64).map(|i| start + i * step))
    }

    /// Append more readings in whole seconds.
    pub fn extend_secs<I: IntoIterator<Item = u64>>(&self, readings: I) {
        self.readings
            .borrow_mut()
            .extend(readings.into_iter().map(Duration::from_secs));
    }
}

impl Clock for ScriptedClock {
    fn now(&self) -> Duration {
        if let Some(next) = self.readings.borrow_mut().pop_front() {
            self.last.set(next);
        }
        self.last.get()
    }
}
