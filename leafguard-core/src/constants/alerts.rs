//! Severity Escalation Cutoffs
//!
//! Literal cutoffs that promote a real-time alert from warning to critical.
//! These are not derived from the threshold table: moving `temp_high` to
//! 30°C still only goes critical above 40°C.

/// Temperature above which a `temp_high` alert is critical (°C).
pub const TEMP_CRITICAL_HIGH_C: f32 = 40.0;

/// Temperature below which a `temp_low` alert is critical (°C).
pub const TEMP_CRITICAL_LOW_C: f32 = 10.0;

/// At most one alert per metric, and four metrics are checked per reading.
pub const MAX_ALERTS_PER_READING: usize = 4;
