//! Sensor Readings
//!
//! A [`Reading`] is one timestamped snapshot from a plant's sensor board.
//! Readings arrive already validated by the ingestion path and are never
//! mutated by the core.
//!
//! Light and reservoir level are optional: not every board carries a light
//! sensor, and a reservoir value of zero means "no sensor fitted" rather than
//! an empty tank. The statistics engine handles both cases explicitly.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time::Timestamp;

/// Monitored metric
///
/// Ordering of the variants is the fixed ordering used in alerts, health
/// advisories and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Metric {
    /// Soil moisture (raw capacitive count, higher is wetter)
    Soil,
    /// Air temperature
    Temperature,
    /// Light intensity
    Light,
    /// Relative humidity
    Humidity,
    /// Reservoir water level
    Water,
}

impl Metric {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Metric::Soil => "soil",
            Metric::Temperature => "temperature",
            Metric::Light => "light",
            Metric::Humidity => "humidity",
            Metric::Water => "water",
        }
    }

    /// Get expected unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            Metric::Soil => "",
            Metric::Temperature => "°C",
            Metric::Light => " lux",
            Metric::Humidity => "%",
            Metric::Water => "%",
        }
    }
}

/// One snapshot of sensor values
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reading {
    /// Soil moisture count
    pub soil: f32,
    /// Air temperature in °C
    pub temp: f32,
    /// Light in lux, `None` when the board has no light sensor
    #[cfg_attr(feature = "serde", serde(default))]
    pub light: Option<f32>,
    /// Relative humidity in %
    pub humidity: f32,
    /// Reservoir level in %, `None` or `0.0` when no sensor is fitted
    #[cfg_attr(feature = "serde", serde(default))]
    pub water: Option<f32>,
    /// When the snapshot was taken
    pub timestamp: Timestamp,
}

impl Reading {
    /// Reading with the always-present metrics
    pub fn new(soil: f32, temp: f32, humidity: f32, timestamp: Timestamp) -> Self {
        Self {
            soil,
            temp,
            light: None,
            humidity,
            water: None,
            timestamp,
        }
    }

    /// Attach a light value
    pub fn with_light(mut self, light: f32) -> Self {
        self.light = Some(light);
        self
    }

    /// Attach a reservoir level
    pub fn with_water(mut self, water: f32) -> Self {
        self.water = Some(water);
        self
    }

    /// Light value with a missing sensor counted as darkness
    pub fn light_or_zero(&self) -> f32 {
        self.light.unwrap_or(0.0)
    }

    /// Reservoir level, only if a sensor reported a real value
    pub fn water_level(&self) -> Option<f32> {
        self.water.filter(|w| *w > 0.0)
    }
}
