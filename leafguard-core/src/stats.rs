//! Windowed Statistics and Trend Classification
//!
//! ## Overview
//!
//! The digest path reduces a window of readings (usually the trailing 24
//! hours) to a handful of numbers per metric: mean, extremes and a coarse
//! trend. Everything is recomputed from scratch on each call; there is no
//! running state, so calling [`compute_statistics`] twice on the same window
//! gives identical results.
//!
//! ## Trend
//!
//! The window is split at `len / 2`. With an odd length the extra element
//! goes to the second half:
//!
//! ```text
//! [ a b c | d e f g ]      len = 7, mid = 3
//!   first    second
//!
//! diff = mean(second) - mean(first)
//!
//! diff >  5% of window average  → rising
//! diff < -5% of window average  → falling
//! otherwise                     → stable
//! ```
//!
//! The threshold is relative to the window average so the same rule fits
//! soil counts in the thousands and humidity in the tens.
//!
//! ## Defined Zero Cases
//!
//! - Empty window: every metric is `avg = min = max = 0`, trend stable,
//!   `reading_count = 0`.
//! - Missing light counts as 0 lux.
//! - A reservoir level of 0 means no sensor and is left out. Water statistics
//!   only exist if the window has at least one positive level.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{constants::stats::TREND_RELATIVE_THRESHOLD, reading::Reading};

/// Direction of a metric across the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Trend {
    /// Second half noticeably higher than the first
    Rising,
    /// Second half noticeably lower than the first
    Falling,
    /// No meaningful change
    #[default]
    Stable,
}

impl Trend {
    /// Lowercase name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Trend::Rising => "rising",
            Trend::Falling => "falling",
            Trend::Stable => "stable",
        }
    }

    /// Arrow used in reports
    pub const fn indicator(&self) -> &'static str {
        match self {
            Trend::Rising => "↑",
            Trend::Falling => "↓",
            Trend::Stable => "→",
        }
    }
}

/// Aggregate statistics for one metric
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetricStats {
    /// Arithmetic mean
    pub avg: f32,
    /// Smallest value
    pub min: f32,
    /// Largest value
    pub max: f32,
    /// Direction across the window
    pub trend: Trend,
}

impl MetricStats {
    /// Statistics for a time-ordered series
    ///
    /// An empty series yields all zeros and a stable trend.
    pub fn from_values(values: &[f32]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let avg = mean(values);
        let (min, max) = values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        Self {
            avg,
            min,
            max,
            trend: classify_trend(values, avg),
        }
    }
}

/// Statistics across every metric for one window
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindowStats {
    /// Temperature in °C
    pub temp: MetricStats,
    /// Soil moisture count
    pub soil: MetricStats,
    /// Light in lux (missing readings count as 0)
    pub light: MetricStats,
    /// Relative humidity in %
    pub humidity: MetricStats,
    /// Reservoir level, only when a sensor reported positive values
    pub water: Option<MetricStats>,
    /// Number of readings in the window
    pub reading_count: usize,
}

/// Compute per-metric statistics over a time-ordered window
pub fn compute_statistics(window: &[Reading]) -> WindowStats {
    let series = |f: fn(&Reading) -> f32| window.iter().map(f).collect::<Vec<_>>();

    let water: Vec<f32> = window.iter().filter_map(Reading::water_level).collect();

    WindowStats {
        temp: MetricStats::from_values(&series(|r| r.temp)),
        soil: MetricStats::from_values(&series(|r| r.soil)),
        light: MetricStats::from_values(&series(Reading::light_or_zero)),
        humidity: MetricStats::from_values(&series(|r| r.humidity)),
        water: (!water.is_empty()).then(|| MetricStats::from_values(&water)),
        reading_count: window.len(),
    }
}

/// Classify the trend of a series whose mean is `avg`
///
/// Fewer than two values cannot be split into two halves and are stable.
/// The threshold takes the sign of `avg`: with a negative average a flat
/// series classifies as rising.
pub fn classify_trend(values: &[f32], avg: f32) -> Trend {
    if values.len() < 2 {
        return Trend::Stable;
    }

    let (first, second) = values.split_at(values.len() / 2);
    let diff = mean(second) - mean(first);
    let threshold = TREND_RELATIVE_THRESHOLD * avg;

    if diff > threshold {
        Trend::Rising
    } else if diff < -threshold {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soil_window(values: &[f32]) -> Vec<Reading> {
        values
            .iter()
            .enumerate()
            .map(|(i, &soil)| Reading::new(soil, 22.0, 55.0, i as u64 * 60_000))
            .collect()
    }

    #[test]
    fn empty_window_is_all_zero() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.reading_count, 0);
        for metric in [stats.temp, stats.soil, stats.light, stats.humidity] {
            assert_eq!(metric, MetricStats::default());
            assert_eq!(metric.trend, Trend::Stable);
        }
        assert!(stats.water.is_none());
    }

    #[test]
    fn rising_soil() {
        let window = soil_window(&[2000.0, 2000.0, 2000.0, 2500.0, 2500.0, 2500.0]);
        let stats = compute_statistics(&window);
        assert_eq!(stats.soil.avg, 2250.0);
        assert_eq!(stats.soil.min, 2000.0);
        assert_eq!(stats.soil.max, 2500.0);
        assert_eq!(stats.soil.trend, Trend::Rising);
        assert_eq!(stats.temp.trend, Trend::Stable);
        assert_eq!(stats.reading_count, 6);
    }

    #[test]
    fn falling_and_stable() {
        assert_eq!(classify_trend(&[100.0, 100.0, 80.0, 80.0], 90.0), Trend::Falling);
        // diff 4 is under 5% of 90 = 4.5
        assert_eq!(classify_trend(&[88.0, 88.0, 92.0, 92.0], 90.0), Trend::Stable);
    }

    #[test]
    fn odd_window_extra_goes_to_second_half() {
        // first = [10], second = [10, 40] → diff 15, avg 20, threshold 1
        assert_eq!(classify_trend(&[10.0, 10.0, 40.0], 20.0), Trend::Rising);
        // first = [40], second = [10, 10]
        assert_eq!(classify_trend(&[40.0, 10.0, 10.0], 20.0), Trend::Falling);
    }

    #[test]
    fn negative_average_flips_threshold_sign() {
        // Threshold is 5% of -20 = -1, so a flat sub-zero series reads as rising
        assert_eq!(classify_trend(&[-20.0; 4], -20.0), Trend::Rising);
        assert_eq!(MetricStats::from_values(&[-20.0; 4]).trend, Trend::Rising);
        // Only a drop of more than |threshold| falls
        assert_eq!(classify_trend(&[-18.0, -18.0, -22.0, -22.0], -20.0), Trend::Falling);
    }

    #[test]
    fn single_reading_is_stable() {
        let stats = MetricStats::from_values(&[1234.0]);
        assert_eq!(stats.avg, 1234.0);
        assert_eq!(stats.min, 1234.0);
        assert_eq!(stats.max, 1234.0);
        assert_eq!(stats.trend, Trend::Stable);
    }

    #[test]
    fn missing_light_counts_as_dark() {
        let window = [
            Reading::new(2000.0, 22.0, 55.0, 0).with_light(1000.0),
            Reading::new(2000.0, 22.0, 55.0, 1),
        ];
        let stats = compute_statistics(&window);
        assert_eq!(stats.light.avg, 500.0);
        assert_eq!(stats.light.min, 0.0);
    }

    #[test]
    fn zero_water_is_excluded() {
        let window = [
            Reading::new(2000.0, 22.0, 55.0, 0).with_water(0.0),
            Reading::new(2000.0, 22.0, 55.0, 1).with_water(60.0),
            Reading::new(2000.0, 22.0, 55.0, 2).with_water(40.0),
        ];
        let water = compute_statistics(&window).water.unwrap();
        assert_eq!(water.avg, 50.0);
        assert_eq!(water.min, 40.0);

        let no_sensor = [Reading::new(2000.0, 22.0, 55.0, 0).with_water(0.0)];
        assert!(compute_statistics(&no_sensor).water.is_none());
    }

    #[test]
    fn recomputing_is_identical() {
        let window = soil_window(&[1900.0, 2100.0, 2050.0, 1800.0, 1750.0]);
        assert_eq!(compute_statistics(&window), compute_statistics(&window));
    }
}
