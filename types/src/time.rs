//! Timestamp type used throughout the custody suite.
//!
//! Timestamps are Unix epoch seconds (UTC), supplied by the host on every
//! entry point. The cooldown and delay checks below are inclusive at the
//! boundary: a duration counts as elapsed at exactly `start + duration`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub const fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Seconds elapsed since this timestamp (relative to `now`, saturating).
    pub fn elapsed_since(&self, now: Timestamp) -> u64 {
        now.0.saturating_sub(self.0)
    }

    /// Whether `duration_secs` have elapsed since this timestamp.
    ///
    /// Inclusive: returns true at exactly `self + duration_secs`.
    pub fn has_expired(&self, duration_secs: u64, now: Timestamp) -> bool {
        now.0 >= self.0.saturating_add(duration_secs)
    }

    /// Seconds still missing until `duration_secs` have elapsed (0 if done).
    pub fn remaining(&self, duration_secs: u64, now: Timestamp) -> u64 {
        self.0.saturating_add(duration_secs).saturating_sub(now.0)
    }

    /// This timestamp moved back by `secs`, saturating at the epoch.
    pub fn rewound(&self, secs: u64) -> Timestamp {
        Timestamp(self.0.saturating_sub(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_boundary_is_inclusive() {
        let start = Timestamp::new(1_000);
        assert!(!start.has_expired(60, Timestamp::new(1_059)));
        assert!(start.has_expired(60, Timestamp::new(1_060)));
        assert!(start.has_expired(60, Timestamp::new(1_061)));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let start = Timestamp::new(1_000);
        assert_eq!(start.remaining(60, Timestamp::new(1_000)), 60);
        assert_eq!(start.remaining(60, Timestamp::new(1_059)), 1);
        assert_eq!(start.remaining(60, Timestamp::new(1_060)), 0);
        assert_eq!(start.remaining(60, Timestamp::new(2_000)), 0);
    }

    #[test]
    fn rewound_saturates_at_epoch() {
        assert_eq!(Timestamp::new(100).rewound(40), Timestamp::new(60));
        assert_eq!(Timestamp::new(100).rewound(500), Timestamp::EPOCH);
    }
}
