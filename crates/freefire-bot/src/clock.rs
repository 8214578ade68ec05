//! Clock trait abstraction for mocking time in tests.
//!
//! - `SystemClock`: delegates to `std::time::Instant`
//! - `MockClock`: returns a controllable instant

use std::time::Instant;

#[cfg(test)]
use std::sync::{Arc, Mutex};
#[cfg(test)]
use std::time::Duration;

/// Abstraction over the system clock.
/// Implement this trait to control time in tests.
pub trait Clock: Send + Sync + 'static {
    /// Return the current instant.
    fn now(&self) -> Instant;
}

/// Live implementation: delegates to real time.
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Mock clock for unit tests.
/// `now()` returns a fixed instant that advances only when you call `advance()`.
#[cfg(test)]
#[derive(Clone)]
pub struct MockClock {
    current: Arc<Mutex<Instant>>,
}

#[cfg(test)]
impl MockClock {
    /// Create a new mock clock fixed at `Instant::now()` at construction time.
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Advance the mock clock by `duration`.
    /// Subsequent `now()` calls will reflect the new time.
    pub fn advance(&self, duration: Duration) {
        *self.current.lock().unwrap() += duration;
    }
}

#[cfg(test)]
impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Clock for MockClock {
    fn now(&self) -> Instant {
        *self.current.lock().unwrap()
    }
}
