//! Real-Time Alert Evaluation
//!
//! ## Overview
//!
//! Every incoming reading is compared against the [`ThresholdSpec`] and turned
//! into zero or more *candidate* alerts. Candidates are not yet notifications:
//! they still have to pass the [`CooldownFilter`](crate::cooldown::CooldownFilter)
//! before anyone hears about them.
//!
//! ## Rules
//!
//! ```text
//! metric    condition              type            severity
//! ───────── ────────────────────── ─────────────── ──────────────────────────────
//! soil      value < soil.low       soil_dry        critical if < low - delta
//!           value > soil.high      soil_wet        warning
//! temp      value > temp.high      temp_high       critical if > 40°C
//!           value < temp.low       temp_low        critical if < 10°C
//! light     value < light.low      light_low       info
//! humidity  value > humidity.high  humidity_high   warning
//!           value < humidity.low   humidity_low    info
//! ```
//!
//! The two directions of a metric are mutually exclusive, so a reading yields
//! at most one alert per metric and at most four in total. Output order is
//! always soil, temperature, light, humidity. Light has no real-time high
//! alert; its upper bound only feeds the daily health assessment.
//!
//! ## Severity Escalation
//!
//! Severity never decreases as a reading moves further past its bound. The
//! escalation cutoffs are fixed constants (see
//! [`constants::alerts`](crate::constants::alerts)) except for soil, which
//! escalates at `soil.low - soil.critical_delta`.
//!
//! ## Memory
//!
//! Results are returned in an [`AlertSet`], a fixed-capacity vector sized for
//! the worst case, so evaluation never reallocates.

use alloc::string::String;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::alerts::{MAX_ALERTS_PER_READING, TEMP_CRITICAL_HIGH_C, TEMP_CRITICAL_LOW_C},
    reading::{Metric, Reading},
    thresholds::{Bounds, ThresholdSpec},
};

/// Candidate alerts for one reading
pub type AlertSet = heapless::Vec<Alert, MAX_ALERTS_PER_READING>;

/// Alert severity, ordered `Info < Warning < Critical`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Severity {
    /// Worth knowing, no action needed yet
    Info,
    /// Needs attention soon
    Warning,
    /// Needs attention now
    Critical,
}

impl Severity {
    /// Lowercase key as stored and sent to notifiers
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert type: metric plus direction
///
/// The string key from [`AlertKind::as_str`] is what the alert history is
/// indexed by, so cooldowns are per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlertKind {
    /// Soil moisture below the dry bound
    SoilDry,
    /// Soil moisture above the wet bound
    SoilWet,
    /// Temperature above the high bound
    TempHigh,
    /// Temperature below the low bound
    TempLow,
    /// Light below the low bound
    LightLow,
    /// Humidity above the high bound
    HumidityHigh,
    /// Humidity below the low bound
    HumidityLow,
}

impl AlertKind {
    /// All kinds, in evaluation order
    pub const ALL: [AlertKind; 7] = [
        AlertKind::SoilDry,
        AlertKind::SoilWet,
        AlertKind::TempHigh,
        AlertKind::TempLow,
        AlertKind::LightLow,
        AlertKind::HumidityHigh,
        AlertKind::HumidityLow,
    ];

    /// Type key, e.g. `"soil_dry"`
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlertKind::SoilDry => "soil_dry",
            AlertKind::SoilWet => "soil_wet",
            AlertKind::TempHigh => "temp_high",
            AlertKind::TempLow => "temp_low",
            AlertKind::LightLow => "light_low",
            AlertKind::HumidityHigh => "humidity_high",
            AlertKind::HumidityLow => "humidity_low",
        }
    }

    /// Parse a type key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == key)
    }

    /// Metric this kind is raised for
    pub const fn metric(&self) -> Metric {
        match self {
            AlertKind::SoilDry | AlertKind::SoilWet => Metric::Soil,
            AlertKind::TempHigh | AlertKind::TempLow => Metric::Temperature,
            AlertKind::LightLow => Metric::Light,
            AlertKind::HumidityHigh | AlertKind::HumidityLow => Metric::Humidity,
        }
    }
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Candidate alert produced from a single reading
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alert {
    /// Metric and direction
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: AlertKind,
    /// How urgent
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
    /// The reading value that crossed the bound
    pub value: f32,
    /// The bound that was crossed
    pub threshold: f32,
}

impl Alert {
    /// Build an alert with its standard message
    pub fn new(kind: AlertKind, severity: Severity, value: f32, threshold: f32) -> Self {
        Self {
            kind,
            severity,
            message: describe(kind, value, threshold),
            value,
            threshold,
        }
    }

    /// History key for cooldown lookups
    pub fn alert_type(&self) -> &'static str {
        self.kind.as_str()
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

fn describe(kind: AlertKind, value: f32, threshold: f32) -> String {
    match kind {
        AlertKind::SoilDry => alloc::format!(
            "Soil is too dry: moisture {value:.0} is below {threshold:.0}"
        ),
        AlertKind::SoilWet => alloc::format!(
            "Soil is waterlogged: moisture {value:.0} is above {threshold:.0}"
        ),
        AlertKind::TempHigh => alloc::format!(
            "Temperature too high: {value:.1}°C is above {threshold:.1}°C"
        ),
        AlertKind::TempLow => alloc::format!(
            "Temperature too low: {value:.1}°C is below {threshold:.1}°C"
        ),
        AlertKind::LightLow => alloc::format!(
            "Light too low: {value:.0} lux is below {threshold:.0} lux"
        ),
        AlertKind::HumidityHigh => alloc::format!(
            "Humidity too high: {value:.0}% is above {threshold:.0}%"
        ),
        AlertKind::HumidityLow => alloc::format!(
            "Humidity too low: {value:.0}% is below {threshold:.0}%"
        ),
    }
}

/// Evaluate one reading against the threshold table
///
/// Pure function of its inputs. Returns between zero and four alerts in the
/// order soil, temperature, light, humidity.
pub fn evaluate(reading: &Reading, thresholds: &ThresholdSpec) -> AlertSet {
    let candidates = [
        soil_alert(reading.soil, &thresholds.soil),
        temp_alert(reading.temp, &thresholds.temp),
        reading.light.and_then(|light| light_alert(light, &thresholds.light)),
        humidity_alert(reading.humidity, &thresholds.humidity),
    ];

    // One slot per metric, so the set can never overflow
    let mut alerts = AlertSet::new();
    alerts.extend(candidates.into_iter().flatten());
    alerts
}

/// Bound crossed below, if any
fn crossed_low(bounds: &Bounds, value: f32) -> Option<f32> {
    bounds.low.filter(|_| bounds.is_below(value))
}

/// Bound crossed above, if any
fn crossed_high(bounds: &Bounds, value: f32) -> Option<f32> {
    bounds.high.filter(|_| bounds.is_above(value))
}

fn soil_alert(value: f32, bounds: &Bounds) -> Option<Alert> {
    if let Some(dry) = crossed_low(bounds, value) {
        let severity = if value < dry - bounds.critical_delta {
            Severity::Critical
        } else {
            Severity::Warning
        };
        return Some(Alert::new(AlertKind::SoilDry, severity, value, dry));
    }
    crossed_high(bounds, value)
        .map(|wet| Alert::new(AlertKind::SoilWet, Severity::Warning, value, wet))
}

fn temp_alert(value: f32, bounds: &Bounds) -> Option<Alert> {
    if let Some(high) = crossed_high(bounds, value) {
        let severity = if value > TEMP_CRITICAL_HIGH_C {
            Severity::Critical
        } else {
            Severity::Warning
        };
        return Some(Alert::new(AlertKind::TempHigh, severity, value, high));
    }
    crossed_low(bounds, value).map(|low| {
        let severity = if value < TEMP_CRITICAL_LOW_C {
            Severity::Critical
        } else {
            Severity::Warning
        };
        Alert::new(AlertKind::TempLow, severity, value, low)
    })
}

fn light_alert(value: f32, bounds: &Bounds) -> Option<Alert> {
    crossed_low(bounds, value)
        .map(|low| Alert::new(AlertKind::LightLow, Severity::Info, value, low))
}

fn humidity_alert(value: f32, bounds: &Bounds) -> Option<Alert> {
    if let Some(high) = crossed_high(bounds, value) {
        return Some(Alert::new(AlertKind::HumidityHigh, Severity::Warning, value, high));
    }
    crossed_low(bounds, value)
        .map(|low| Alert::new(AlertKind::HumidityLow, Severity::Info, value, low))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nominal() -> Reading {
        Reading::new(2200.0, 24.0, 60.0, 0).with_light(900.0)
    }

    fn kinds(alerts: &AlertSet) -> alloc::vec::Vec<AlertKind> {
        alerts.iter().map(|a| a.kind).collect()
    }

    #[test]
    fn nominal_reading_is_quiet() {
        assert!(evaluate(&nominal(), &ThresholdSpec::default()).is_empty());
    }

    #[test]
    fn soil_escalation() {
        let spec = ThresholdSpec::default();

        let alerts = evaluate(&Reading { soil: 1500.0, ..nominal() }, &spec);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::SoilDry);
        assert_eq!(alerts[0].severity, Severity::Critical);
        assert_eq!(alerts[0].threshold, 1800.0);

        let alerts = evaluate(&Reading { soil: 1700.0, ..nominal() }, &spec);
        assert_eq!(alerts[0].kind, AlertKind::SoilDry);
        assert_eq!(alerts[0].severity, Severity::Warning);

        // Exactly at the escalation point is still a warning
        let alerts = evaluate(&Reading { soil: 1600.0, ..nominal() }, &spec);
        assert_eq!(alerts[0].severity, Severity::Warning);

        let alerts = evaluate(&Reading { soil: 2700.0, ..nominal() }, &spec);
        assert_eq!(alerts[0].kind, AlertKind::SoilWet);
        assert_eq!(alerts[0].severity, Severity::Warning);
    }

    #[test]
    fn temperature_escalation() {
        let spec = ThresholdSpec::default();

        let alerts = evaluate(&Reading { temp: 42.0, ..nominal() }, &spec);
        assert_eq!((alerts[0].kind, alerts[0].severity), (AlertKind::TempHigh, Severity::Critical));

        let alerts = evaluate(&Reading { temp: 36.0, ..nominal() }, &spec);
        assert_eq!((alerts[0].kind, alerts[0].severity), (AlertKind::TempHigh, Severity::Warning));

        let alerts = evaluate(&Reading { temp: 8.0, ..nominal() }, &spec);
        assert_eq!((alerts[0].kind, alerts[0].severity), (AlertKind::TempLow, Severity::Critical));

        let alerts = evaluate(&Reading { temp: 12.0, ..nominal() }, &spec);
        assert_eq!((alerts[0].kind, alerts[0].severity), (AlertKind::TempLow, Severity::Warning));
    }

    #[test]
    fn bounds_are_exclusive() {
        let spec = ThresholdSpec::default();
        let edge = Reading::new(1800.0, 35.0, 85.0, 0).with_light(500.0);
        assert!(evaluate(&edge, &spec).is_empty());

        let other_edge = Reading::new(2600.0, 15.0, 35.0, 0).with_light(500.0);
        assert!(evaluate(&other_edge, &spec).is_empty());
    }

    #[test]
    fn light_and_humidity() {
        let spec = ThresholdSpec::default();

        let alerts = evaluate(&Reading { light: Some(100.0), ..nominal() }, &spec);
        assert_eq!((alerts[0].kind, alerts[0].severity), (AlertKind::LightLow, Severity::Info));

        // Bright light never alerts in the real-time path
        assert!(evaluate(&Reading { light: Some(50_000.0), ..nominal() }, &spec).is_empty());

        let alerts = evaluate(&Reading { humidity: 95.0, ..nominal() }, &spec);
        assert_eq!((alerts[0].kind, alerts[0].severity), (AlertKind::HumidityHigh, Severity::Warning));

        let alerts = evaluate(&Reading { humidity: 20.0, ..nominal() }, &spec);
        assert_eq!((alerts[0].kind, alerts[0].severity), (AlertKind::HumidityLow, Severity::Info));
    }

    #[test]
    fn missing_light_never_alerts() {
        let reading = Reading { light: None, ..nominal() };
        assert!(evaluate(&reading, &ThresholdSpec::default()).is_empty());
    }

    #[test]
    fn everything_wrong_yields_four_in_order() {
        let reading = Reading::new(1000.0, 45.0, 95.0, 0).with_light(10.0);
        let alerts = evaluate(&reading, &ThresholdSpec::default());
        assert_eq!(
            kinds(&alerts),
            [AlertKind::SoilDry, AlertKind::TempHigh, AlertKind::LightLow, AlertKind::HumidityHigh]
        );
    }

    #[test]
    fn custom_table_is_respected() {
        let spec = ThresholdSpec::default().with_soil(Bounds::between(1000.0, 3000.0, 100.0));
        let alerts = evaluate(&Reading { soil: 950.0, ..nominal() }, &spec);
        assert_eq!(alerts[0].severity, Severity::Warning);
        let alerts = evaluate(&Reading { soil: 850.0, ..nominal() }, &spec);
        assert_eq!(alerts[0].severity, Severity::Critical);
    }

    #[test]
    fn kind_keys_round_trip() {
        for kind in AlertKind::ALL {
            assert_eq!(AlertKind::from_key(kind.as_str()), Some(kind));
        }
        assert_eq!(AlertKind::from_key("light_high"), None);
    }

    #[test]
    fn message_mentions_value_and_bound() {
        let alert = Alert::new(AlertKind::SoilDry, Severity::Critical, 1500.0, 1800.0);
        assert!(alert.message.contains("1500"));
        assert!(alert.message.contains("1800"));
        assert!(alert.to_string().starts_with("[critical]"));
    }
}
