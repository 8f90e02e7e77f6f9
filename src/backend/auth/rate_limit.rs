//! Login attempt rate limiting.
//!
//! Fixed-window counters keyed by the login identifier. The limiter is
//! consulted before any credential work happens, so a rejected attempt costs
//! neither a database lookup nor a bcrypt verification.
//!
//! The endpoint layer depends on the [`LoginRateLimiter`] trait rather than
//! the in-memory implementation, so a shared store (e.g. Redis or a SQL
//! table) can be substituted when running multiple server instances.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Keyed attempt counter consulted on every login request.
pub trait LoginRateLimiter: Send + Sync {
    /// Records an attempt for `key` and reports whether it may proceed.
    ///
    /// Recording and checking happen as one operation; callers never observe
    /// a count without having already incremented it.
    fn allow(&self, key: &str) -> bool;
}

struct Window {
    started: Instant,
    attempts: u32,
}

/// In-memory fixed-window limiter.
///
/// Counters reset when their window elapses. A successful login does not
/// reset the counter early; one success cannot be used to launder a fresh
/// guessing quota.
pub struct FixedWindowLimiter {
    max_attempts: u32,
    window: Duration,
    windows: Mutex<HashMap<String, Window>>,
}

// Purge expired entries once the map grows past this many keys.
const PURGE_THRESHOLD: usize = 1024;

impl FixedWindowLimiter {
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }
}

impl LoginRateLimiter for FixedWindowLimiter {
    fn allow(&self, key: &str) -> bool {
        let mut windows = self.windows.lock().unwrap();
        let now = Instant::now();

        if windows.len() >= PURGE_THRESHOLD {
            let window = self.window;
            windows.retain(|_, slot| now.duration_since(slot.started) < window);
        }

        let slot = windows.entry(key.to_string()).or_insert(Window {
            started: now,
            attempts: 0,
        });

        if now.duration_since(slot.started) >= self.window {
            slot.started = now;
            slot.attempts = 0;
        }

        slot.attempts += 1;
        slot.attempts <= self.max_attempts
    }
}
