//! Threshold Table
//!
//! Static configuration mapping each metric to its low/high bounds. The
//! table is an explicit immutable value handed to every evaluator call, so a
//! test (or a second plant with different needs) can use its own table
//! without touching process-wide state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::thresholds::*,
    errors::{ThresholdError, ThresholdResult},
    time::minutes,
};

/// Bounds for a single metric
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// Alert when the value falls below this
    pub low: Option<f32>,
    /// Alert when the value rises above this
    pub high: Option<f32>,
    /// Distance past `low` that escalates to critical
    ///
    /// Only soil uses it today; temperature escalates on fixed cutoffs.
    pub critical_delta: f32,
}

impl Bounds {
    /// Bounds on both sides
    pub const fn between(low: f32, high: f32, critical_delta: f32) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
            critical_delta,
        }
    }

    /// Only a lower bound
    pub const fn at_least(low: f32) -> Self {
        Self {
            low: Some(low),
            high: None,
            critical_delta: 0.0,
        }
    }

    /// True if `value` is strictly below the low bound
    pub fn is_below(&self, value: f32) -> bool {
        self.low.map_or(false, |low| value < low)
    }

    /// True if `value` is strictly above the high bound
    pub fn is_above(&self, value: f32) -> bool {
        self.high.map_or(false, |high| value > high)
    }

    fn validate(&self, metric: &'static str) -> ThresholdResult<()> {
        for (field, value) in [("low", self.low), ("high", self.high)] {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(ThresholdError::NonFinite { metric, field });
                }
            }
        }
        if !self.critical_delta.is_finite() {
            return Err(ThresholdError::NonFinite {
                metric,
                field: "critical_delta",
            });
        }
        if self.critical_delta < 0.0 {
            return Err(ThresholdError::NegativeDelta {
                metric,
                delta: self.critical_delta,
            });
        }
        if let (Some(low), Some(high)) = (self.low, self.high) {
            if low > high {
                return Err(ThresholdError::InvertedBounds { metric, low, high });
            }
        }
        Ok(())
    }
}

/// Per-metric bounds plus the alert cooldown
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThresholdSpec {
    /// Soil moisture: low = dry, high = wet
    pub soil: Bounds,
    /// Temperature in °C
    pub temp: Bounds,
    /// Light in lux; `high` is only a hint for health assessment
    pub light: Bounds,
    /// Relative humidity in %
    pub humidity: Bounds,
    /// Minimum time between two triggered alerts of the same type (ms)
    pub cooldown_ms: u64,
}

impl Default for ThresholdSpec {
    fn default() -> Self {
        Self {
            soil: Bounds::between(SOIL_DRY, SOIL_WET, SOIL_CRITICAL_DELTA),
            temp: Bounds::between(TEMP_LOW_C, TEMP_HIGH_C, 0.0),
            light: Bounds::between(LIGHT_LOW_LUX, LIGHT_HIGH_LUX, 0.0),
            humidity: Bounds::between(HUMIDITY_LOW_PCT, HUMIDITY_HIGH_PCT, 0.0),
            cooldown_ms: minutes(DEFAULT_COOLDOWN_MINUTES),
        }
    }
}

impl ThresholdSpec {
    /// Override soil bounds
    pub fn with_soil(mut self, bounds: Bounds) -> Self {
        self.soil = bounds;
        self
    }

    /// Override temperature bounds
    pub fn with_temp(mut self, bounds: Bounds) -> Self {
        self.temp = bounds;
        self
    }

    /// Override light bounds
    pub fn with_light(mut self, bounds: Bounds) -> Self {
        self.light = bounds;
        self
    }

    /// Override humidity bounds
    pub fn with_humidity(mut self, bounds: Bounds) -> Self {
        self.humidity = bounds;
        self
    }

    /// Override the cooldown, in minutes
    pub fn with_cooldown_minutes(mut self, cooldown: u64) -> Self {
        self.cooldown_ms = minutes(cooldown);
        self
    }

    /// Check the table is usable before starting evaluation
    pub fn validate(&self) -> ThresholdResult<()> {
        self.soil.validate("soil")?;
        self.temp.validate("temperature")?;
        self.light.validate("light")?;
        self.humidity.validate("humidity")?;
        if self.cooldown_ms == 0 {
            return Err(ThresholdError::ZeroCooldown);
        }
        Ok(())
    }
}
