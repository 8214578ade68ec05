//! Per-user rate limiter for the `!info` command.
//!
//! Fixed window: one accepted invocation per user per window. A throttled
//! call neither consumes nor extends the window. The whole map is held
//! under one mutex so the check-and-set is atomic; two near-simultaneous
//! calls from the same user cannot both be admitted.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};

/// Upper bound on tracked users; inserting beyond it evicts the entry with
/// the oldest accepted call.
const MAX_TRACKED_USERS: usize = 1024;

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Throttled,
}

/// Fixed-window per-user rate limiter. Thread-safe.
pub struct RateLimiter<C: Clock = SystemClock> {
    window: Duration,
    capacity: usize,
    clock: C,
    last_accepted: Mutex<HashMap<u64, Instant>>,
}

impl RateLimiter {
    /// Create a limiter admitting one call per user per `window`.
    pub fn new(window: Duration) -> Self {
        Self::with_clock(window, SystemClock)
    }
}

impl<C: Clock> RateLimiter<C> {
    /// Create a limiter with an injected clock (tests).
    pub fn with_clock(window: Duration, clock: C) -> Self {
        Self {
            window,
            capacity: MAX_TRACKED_USERS,
            clock,
            last_accepted: Mutex::new(HashMap::new()),
        }
    }

    /// Check whether `user_id` may invoke the command now.
    ///
    /// `Allowed` claims the slot; `Throttled` leaves the window untouched.
    pub fn check(&self, user_id: u64) -> Decision {
        let now = self.clock.now();
        let mut map = self.last_accepted.lock().unwrap();

        if let Some(last) = map.get(&user_id) {
            if now.duration_since(*last) < self.window {
                return Decision::Throttled;
            }
        }

        if map.len() >= self.capacity && !map.contains_key(&user_id) {
            let stalest = map.iter().min_by_key(|(_, t)| **t).map(|(id, _)| *id);
            if let Some(id) = stalest {
                map.remove(&id);
            }
        }

        map.insert(user_id, now);
        Decision::Allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MockClock;

    const WINDOW: Duration = Duration::from_secs(10);

    fn limiter() -> (RateLimiter<MockClock>, MockClock) {
        let clock = MockClock::new();
        (RateLimiter::with_clock(WINDOW, clock.clone()), clock)
    }

    #[test]
    fn first_call_is_allowed() {
        let (limiter, _clock) = limiter();
        assert_eq!(limiter.check(1), Decision::Allowed);
    }

    #[test]
    fn second_call_inside_window_is_throttled() {
        let (limiter, clock) = limiter();
        assert_eq!(limiter.check(1), Decision::Allowed);
        clock.advance(Duration::from_secs(3));
        assert_eq!(limiter.check(1), Decision::Throttled);
    }

    #[test]
    fn different_users_do_not_share_a_window() {
        let (limiter, _clock) = limiter();
        assert_eq!(limiter.check(1), Decision::Allowed);
        assert_eq!(limiter.check(2), Decision::Allowed);
    }

    #[test]
    fn window_expiry_readmits() {
        let (limiter, clock) = limiter();
        assert_eq!(limiter.check(1), Decision::Allowed);
        clock.advance(WINDOW);
        assert_eq!(limiter.check(1), Decision::Allowed);
    }

    #[test]
    fn throttled_call_does_not_extend_the_window() {
        let (limiter, clock) = limiter();
        assert_eq!(limiter.check(1), Decision::Allowed);

        // Hammering inside the window must not push the expiry out.
        clock.advance(Duration::from_secs(9));
        assert_eq!(limiter.check(1), Decision::Throttled);
        clock.advance(Duration::from_secs(1));
        assert_eq!(limiter.check(1), Decision::Allowed);
    }

    #[test]
    fn capacity_evicts_the_stalest_entry() {
        let clock = MockClock::new();
        let mut limiter = RateLimiter::with_clock(WINDOW, clock.clone());
        limiter.capacity = 2;

        assert_eq!(limiter.check(1), Decision::Allowed);
        clock.advance(Duration::from_secs(1));
        assert_eq!(limiter.check(2), Decision::Allowed);
        clock.advance(Duration::from_secs(1));

        // User 3 pushes out user 1 (stalest); user 2 is still tracked.
        assert_eq!(limiter.check(3), Decision::Allowed);
        assert_eq!(limiter.check(2), Decision::Throttled);
        assert_eq!(limiter.check(1), Decision::Allowed);
    }
}
