//! Time source seam for deterministic status derivation.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current time, in whole seconds since the Unix epoch.
///
/// Job status and progress are pure functions of elapsed time, so swapping
/// the clock is all a test needs to pin them.
pub trait Clock: Send + Sync {
    /// Current time in seconds since the Unix epoch.
    fn now_unix(&self) -> u64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}
