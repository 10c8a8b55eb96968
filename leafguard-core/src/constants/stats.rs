//! Trend Classification Parameters

/// Fraction of the window average the half-to-half change must exceed
/// before a metric is classified as rising or falling.
///
/// Relative rather than absolute so the same rule works for soil counts in
/// the thousands and humidity in the tens. Near-zero averages get no special
/// case.
pub const TREND_RELATIVE_THRESHOLD: f32 = 0.05;
