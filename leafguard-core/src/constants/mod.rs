//! Constants for LeafGuard Core
//!
//! All numeric values used by the evaluators live here with a note on what
//! they mean. Defaults that an operator may override are collected in
//! [`thresholds`]; escalation cutoffs in [`alerts`] and [`health`] are fixed
//! and part of the alerting contract.
//!
//! ## Organization
//!
//! - **Thresholds**: default low/high bounds per metric
//! - **Alerts**: severity escalation cutoffs for the real-time path
//! - **Health**: window-level cutoffs for the digest path
//! - **Stats**: trend classification parameters
//! - **Time**: unit conversions and the digest window

/// Default threshold table values.
pub mod thresholds;

/// Severity escalation cutoffs for per-reading alerts.
pub mod alerts;

/// Cutoffs used by the window-level health assessment.
pub mod health;

/// Trend classification parameters.
pub mod stats;

/// Time-related constants.
pub mod time;

pub use alerts::{MAX_ALERTS_PER_READING, TEMP_CRITICAL_HIGH_C, TEMP_CRITICAL_LOW_C};
pub use thresholds::{DEFAULT_COOLDOWN_MINUTES, SOIL_DRY, SOIL_WET};
pub use time::{MS_PER_MINUTE, MS_PER_SECOND};
