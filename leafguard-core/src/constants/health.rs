//! Health Assessment Cutoffs
//!
//! Window-level cutoffs. Unlike the real-time path these look at the
//! extremes and averages of a whole window, so they are deliberately wider
//! than the per-reading bounds.

/// Any reading above this in the window counts as a heat spike (°C).
pub const HEAT_SPIKE_MAX_C: f32 = 38.0;

/// Any reading below this in the window counts as cold exposure (°C).
pub const COLD_EXPOSURE_MIN_C: f32 = 15.0;

/// A rising temperature trend is only worth mentioning above this average (°C).
pub const HEAT_TREND_AVG_C: f32 = 30.0;

/// Average humidity below this is reported as dry air (%RH).
pub const DRY_AIR_AVG_PCT: f32 = 40.0;

/// Average reservoir level below this needs a refill (%).
pub const LOW_RESERVOIR_AVG_PCT: f32 = 30.0;
