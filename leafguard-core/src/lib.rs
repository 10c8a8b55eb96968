//! Core decision engine for LeafGuard
//!
//! Turns periodic plant sensor readings (soil moisture, temperature, light,
//! humidity, reservoir level) into two kinds of output:
//!
//! - **Real-time alerts**: each reading is compared against a threshold table
//!   and the resulting candidates are passed through a cooldown filter so the
//!   same condition does not page someone every few minutes.
//! - **Digest reports**: a window of readings (typically the trailing 24
//!   hours) is reduced to per-metric statistics with a trend, assessed for
//!   plant health and formatted into a daily report.
//!
//! Everything in this crate is a pure, synchronous computation over data the
//! caller already fetched. Storage, notification delivery and weather lookups
//! live in `leafguard-connectors`.
//!
//! ```no_run
//! use leafguard_core::{evaluate, CooldownFilter, MemoryHistory, Reading, ThresholdSpec};
//!
//! let thresholds = ThresholdSpec::default();
//! let reading = Reading::new(1500.0, 22.0, 60.0, 1_700_000_000_000).with_light(800.0);
//!
//! let candidates = evaluate(&reading, &thresholds);
//! let history = MemoryHistory::new();
//! let filter = CooldownFilter::from_thresholds(&thresholds);
//!
//! for alert in filter.filter(candidates, &history, reading.timestamp) {
//!     // persist + notify
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod logging;

pub mod alerts;
pub mod constants;
pub mod cooldown;
pub mod errors;
pub mod health;
pub mod reading;
pub mod report;
pub mod stats;
pub mod thresholds;
pub mod time;

// Public API
pub use alerts::{evaluate, Alert, AlertKind, AlertSet, Severity};
pub use cooldown::{AlertHistory, CooldownFilter, MemoryHistory};
pub use errors::{ThresholdError, ThresholdResult};
pub use health::{assess_health, HealthAdvisory};
pub use reading::{Metric, Reading};
pub use report::{compose_report, DigestInput, WeatherAdvisory};
pub use stats::{compute_statistics, MetricStats, Trend, WindowStats};
pub use thresholds::{Bounds, ThresholdSpec};
pub use time::Timestamp;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
