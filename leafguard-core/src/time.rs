//! Time handling for readings and alert history
//!
//! All instants are plain millisecond timestamps so they can cross the
//! storage and transport boundary without conversion. Clock access goes
//! through [`TimeSource`] so the real-time path can be driven by a fixed
//! clock in tests.

use chrono::{DateTime, NaiveDate, Utc};

use crate::constants::time::MS_PER_MINUTE;

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of the current time
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;
}

/// Wall clock (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Create a clock stuck at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute time
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move forward by `ms`
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }

    /// Move forward by whole minutes
    pub fn advance_minutes(&mut self, minutes: u64) {
        self.advance(minutes * MS_PER_MINUTE);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }
}

/// Convert whole minutes to milliseconds
pub const fn minutes(minutes: u64) -> u64 {
    minutes * MS_PER_MINUTE
}

/// Calendar date (UTC) a timestamp falls on
///
/// Returns `None` only for timestamps past chrono's supported range.
pub fn utc_date(timestamp: Timestamp) -> Option<NaiveDate> {
    let millis = i64::try_from(timestamp).ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.date_naive())
}
