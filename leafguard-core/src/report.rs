//! Daily Digest Formatting
//!
//! Pure formatting of a digest: no decisions are made here. The section
//! order is relied on by whatever displays or parses the report, so it is
//! fixed:
//!
//! ```text
//! header          date and reading count
//! statistics      temperature, soil, light, humidity, water (if present)
//! health          advisories, or an explicit all-clear line
//! weather         only when an advisory was supplied
//! ```

use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use chrono::NaiveDate;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    health::HealthAdvisory,
    reading::Metric,
    stats::{MetricStats, WindowStats},
};

/// Line printed when the health assessment found nothing
pub const ALL_CLEAR: &str = "All metrics are within healthy ranges. No action needed.";

/// Tip printed when rain is forecast
pub const SKIP_WATERING_TIP: &str = "Rain is expected: skip watering outdoor plants today.";

/// Local weather summary fetched by the caller
///
/// A failed or missing fetch is simply `None` in [`DigestInput`], never an
/// error.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherAdvisory {
    /// Short description, e.g. "Light rain"
    pub condition: String,
    /// Air temperature in °C
    pub temp: f32,
    /// Relative humidity in %
    pub humidity: f32,
    /// Wind speed in m/s
    pub wind_speed: f32,
    /// Rain expected in the forecast window
    pub rain_expected: bool,
    /// Weather warnings for the location
    #[cfg_attr(feature = "serde", serde(default))]
    pub alerts: Vec<String>,
}

/// Everything a digest is built from
#[derive(Debug, Clone, Copy)]
pub struct DigestInput<'a> {
    /// Report date
    pub date: NaiveDate,
    /// Window statistics
    pub stats: &'a WindowStats,
    /// Health assessment output, in order
    pub advisories: &'a [HealthAdvisory],
    /// Weather for the location, if the fetch succeeded
    pub weather: Option<&'a WeatherAdvisory>,
}

/// Format a digest report
pub fn compose_report(input: &DigestInput<'_>) -> String {
    Report(input).to_string()
}

struct Report<'a, 'b>(&'a DigestInput<'b>);

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input = self.0;

        writeln!(f, "Daily Plant Report - {}", input.date)?;
        writeln!(f, "Readings analysed: {}", input.stats.reading_count)?;

        writeln!(f)?;
        writeln!(f, "== Statistics ==")?;
        let stats = input.stats;
        write_metric(f, Metric::Temperature, &stats.temp)?;
        write_metric(f, Metric::Soil, &stats.soil)?;
        write_metric(f, Metric::Light, &stats.light)?;
        write_metric(f, Metric::Humidity, &stats.humidity)?;
        if let Some(water) = &stats.water {
            write_metric(f, Metric::Water, water)?;
        }

        writeln!(f)?;
        writeln!(f, "== Plant Health ==")?;
        if input.advisories.is_empty() {
            writeln!(f, "{ALL_CLEAR}")?;
        }
        for advisory in input.advisories {
            writeln!(f, "- [{}] {}", advisory.severity(), advisory)?;
        }

        if let Some(weather) = input.weather {
            writeln!(f)?;
            writeln!(f, "== Weather ==")?;
            writeln!(
                f,
                "{}, {:.1}°C, humidity {:.0}%, wind {:.1} m/s",
                weather.condition, weather.temp, weather.humidity, weather.wind_speed
            )?;
            for alert in &weather.alerts {
                writeln!(f, "- {alert}")?;
            }
            if weather.rain_expected {
                writeln!(f, "Tip: {SKIP_WATERING_TIP}")?;
            }
        }

        Ok(())
    }
}

fn label(metric: Metric) -> &'static str {
    match metric {
        Metric::Soil => "Soil moisture",
        Metric::Temperature => "Temperature",
        Metric::Light => "Light",
        Metric::Humidity => "Humidity",
        Metric::Water => "Water level",
    }
}

fn write_metric(f: &mut fmt::Formatter<'_>, metric: Metric, stats: &MetricStats) -> fmt::Result {
    // Temperature is the only metric where a decimal place means anything
    let precision = if metric == Metric::Temperature { 1 } else { 0 };
    let unit = metric.unit();
    writeln!(
        f,
        "{}: avg {:.p$}{unit} (range {:.p$}{unit} to {:.p$}{unit}) {} {}",
        label(metric),
        stats.avg,
        stats.min,
        stats.max,
        stats.trend.indicator(),
        stats.trend.as_str(),
        p = precision,
    )
}
