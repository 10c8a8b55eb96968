//! Window-Level Health Assessment
//!
//! Coarser counterpart of the real-time evaluator: instead of one reading it
//! looks at the statistics of a whole window and produces plain-language
//! advisories for the daily digest.
//!
//! Each metric has an ordered list of rules and only the first match fires,
//! so a plant whose soil is already dry is not also told its soil is
//! trending dry. Output order is fixed: soil, temperature, light, humidity,
//! water. An empty result means every metric is nominal.

use alloc::{string::String, vec::Vec};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    alerts::Severity,
    constants::health::*,
    reading::Metric,
    stats::{MetricStats, Trend, WindowStats},
    thresholds::ThresholdSpec,
};

/// One finding from the health assessment
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum HealthAdvisory {
    /// Average soil moisture below the dry bound
    DrySoil {
        /// Window average
        avg: f32,
        /// Dry bound
        bound: f32,
    },
    /// Average soil moisture above the wet bound
    Overwatered {
        /// Window average
        avg: f32,
        /// Wet bound
        bound: f32,
    },
    /// Soil still in range but drying out
    SoilDrying {
        /// Window average
        avg: f32,
    },
    /// Temperature peaked above the spike cutoff
    HeatSpike {
        /// Window maximum
        max: f32,
    },
    /// Temperature dipped below the cold cutoff
    ColdExposure {
        /// Window minimum
        min: f32,
    },
    /// Warm and getting warmer
    HeatStressTrend {
        /// Window average
        avg: f32,
    },
    /// Average light below the low bound
    LowLight {
        /// Window average
        avg: f32,
        /// Low bound
        bound: f32,
    },
    /// Average light above the high hint
    IntenseLight {
        /// Window average
        avg: f32,
        /// High hint
        bound: f32,
    },
    /// Humid enough for mould and mildew
    FungalRisk {
        /// Window average
        avg: f32,
        /// High bound
        bound: f32,
    },
    /// Air drier than the plant likes
    DryAir {
        /// Window average
        avg: f32,
    },
    /// Reservoir needs a refill
    LowReservoir {
        /// Window average
        avg: f32,
    },
}

impl HealthAdvisory {
    /// Metric the advisory is about
    pub const fn metric(&self) -> Metric {
        match self {
            Self::DrySoil { .. } | Self::Overwatered { .. } | Self::SoilDrying { .. } => {
                Metric::Soil
            }
            Self::HeatSpike { .. } | Self::ColdExposure { .. } | Self::HeatStressTrend { .. } => {
                Metric::Temperature
            }
            Self::LowLight { .. } | Self::IntenseLight { .. } => Metric::Light,
            Self::FungalRisk { .. } | Self::DryAir { .. } => Metric::Humidity,
            Self::LowReservoir { .. } => Metric::Water,
        }
    }

    /// How urgent the advisory is
    pub const fn severity(&self) -> Severity {
        match self {
            Self::DrySoil { .. } | Self::HeatSpike { .. } => Severity::Critical,
            Self::Overwatered { .. }
            | Self::ColdExposure { .. }
            | Self::LowLight { .. }
            | Self::FungalRisk { .. }
            | Self::LowReservoir { .. } => Severity::Warning,
            Self::SoilDrying { .. }
            | Self::HeatStressTrend { .. }
            | Self::IntenseLight { .. }
            | Self::DryAir { .. } => Severity::Info,
        }
    }

    /// Rendered message
    pub fn message(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for HealthAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DrySoil { avg, bound } => write!(
                f,
                "Soil has been dry all day (avg {avg:.0}, dry below {bound:.0}). Water the plant."
            ),
            Self::Overwatered { avg, bound } => write!(
                f,
                "Soil is waterlogged (avg {avg:.0}, wet above {bound:.0}). Hold off watering and check drainage."
            ),
            Self::SoilDrying { avg } => write!(
                f,
                "Soil moisture is trending down (avg {avg:.0}). Plan to water soon."
            ),
            Self::HeatSpike { max } => write!(
                f,
                "Temperature spiked to {max:.1}°C. Move the plant away from direct heat."
            ),
            Self::ColdExposure { min } => write!(
                f,
                "Temperature dropped to {min:.1}°C. Protect the plant from drafts and cold."
            ),
            Self::HeatStressTrend { avg } => write!(
                f,
                "Temperature is rising with an average of {avg:.1}°C. Watch for heat stress."
            ),
            Self::LowLight { avg, bound } => write!(
                f,
                "Light has been insufficient (avg {avg:.0} lux, below {bound:.0} lux). Move to a brighter spot."
            ),
            Self::IntenseLight { avg, bound } => write!(
                f,
                "Light has been intense (avg {avg:.0} lux, above {bound:.0} lux). Watch for leaf scorch."
            ),
            Self::FungalRisk { avg, bound } => write!(
                f,
                "Humidity is high (avg {avg:.0}%, above {bound:.0}%). Improve airflow to avoid fungal growth."
            ),
            Self::DryAir { avg } => write!(
                f,
                "Air is dry (avg {avg:.0}%). Consider misting or a humidifier."
            ),
            Self::LowReservoir { avg } => write!(
                f,
                "Water reservoir is low (avg {avg:.0}%). Refill it."
            ),
        }
    }
}

/// Derive health advisories from window statistics
///
/// At most one advisory per metric, in the order soil, temperature, light,
/// humidity, water.
pub fn assess_health(stats: &WindowStats, thresholds: &ThresholdSpec) -> Vec<HealthAdvisory> {
    [
        soil_health(&stats.soil, thresholds),
        temp_health(&stats.temp),
        light_health(&stats.light, thresholds),
        humidity_health(&stats.humidity, thresholds),
        stats.water.as_ref().and_then(water_health),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn soil_health(soil: &MetricStats, thresholds: &ThresholdSpec) -> Option<HealthAdvisory> {
    let bounds = &thresholds.soil;
    if let Some(bound) = bounds.low.filter(|_| bounds.is_below(soil.avg)) {
        Some(HealthAdvisory::DrySoil { avg: soil.avg, bound })
    } else if let Some(bound) = bounds.high.filter(|_| bounds.is_above(soil.avg)) {
        Some(HealthAdvisory::Overwatered { avg: soil.avg, bound })
    } else if soil.trend == Trend::Falling {
        Some(HealthAdvisory::SoilDrying { avg: soil.avg })
    } else {
        None
    }
}

fn temp_health(temp: &MetricStats) -> Option<HealthAdvisory> {
    if temp.max > HEAT_SPIKE_MAX_C {
        Some(HealthAdvisory::HeatSpike { max: temp.max })
    } else if temp.min < COLD_EXPOSURE_MIN_C {
        Some(HealthAdvisory::ColdExposure { min: temp.min })
    } else if temp.trend == Trend::Rising && temp.avg > HEAT_TREND_AVG_C {
        Some(HealthAdvisory::HeatStressTrend { avg: temp.avg })
    } else {
        None
    }
}

fn light_health(light: &MetricStats, thresholds: &ThresholdSpec) -> Option<HealthAdvisory> {
    let bounds = &thresholds.light;
    if let Some(bound) = bounds.low.filter(|_| bounds.is_below(light.avg)) {
        Some(HealthAdvisory::LowLight { avg: light.avg, bound })
    } else {
        bounds
            .high
            .filter(|_| bounds.is_above(light.avg))
            .map(|bound| HealthAdvisory::IntenseLight { avg: light.avg, bound })
    }
}

fn humidity_health(humidity: &MetricStats, thresholds: &ThresholdSpec) -> Option<HealthAdvisory> {
    let bounds = &thresholds.humidity;
    if let Some(bound) = bounds.high.filter(|_| bounds.is_above(humidity.avg)) {
        Some(HealthAdvisory::FungalRisk { avg: humidity.avg, bound })
    } else if humidity.avg < DRY_AIR_AVG_PCT {
        Some(HealthAdvisory::DryAir { avg: humidity.avg })
    } else {
        None
    }
}

fn water_health(water: &MetricStats) -> Option<HealthAdvisory> {
    (water.avg < LOW_RESERVOIR_AVG_PCT).then_some(HealthAdvisory::LowReservoir { avg: water.avg })
}

/// Render advisories as plain strings
pub fn messages(advisories: &[HealthAdvisory]) -> Vec<String> {
    advisories.iter().map(HealthAdvisory::message).collect()
}
