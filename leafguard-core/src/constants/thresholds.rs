//! Default Threshold Table
//!
//! Bounds a healthy indoor plant is expected to stay within. Soil moisture
//! is the raw capacitive sensor count (higher is wetter), light is lux,
//! temperature is °C and humidity is %RH.

// ===== SOIL MOISTURE (raw sensor counts) =====

/// Below this the soil is considered dry.
pub const SOIL_DRY: f32 = 1800.0;

/// Above this the soil is considered waterlogged.
pub const SOIL_WET: f32 = 2600.0;

/// How far below [`SOIL_DRY`] a reading must fall to escalate to critical.
pub const SOIL_CRITICAL_DELTA: f32 = 200.0;

// ===== TEMPERATURE (°C) =====

/// Above this the plant is heat stressed.
pub const TEMP_HIGH_C: f32 = 35.0;

/// Below this the plant is cold stressed.
pub const TEMP_LOW_C: f32 = 15.0;

// ===== LIGHT (lux) =====

/// Below this the plant is not getting enough light.
pub const LIGHT_LOW_LUX: f32 = 500.0;

/// Upper light hint.
///
/// Only the window-level health assessment looks at this; a single bright
/// reading never raises a real-time alert.
pub const LIGHT_HIGH_LUX: f32 = 1600.0;

// ===== HUMIDITY (%RH) =====

/// Below this the air is too dry.
pub const HUMIDITY_LOW_PCT: f32 = 35.0;

/// Above this fungal growth becomes likely.
pub const HUMIDITY_HIGH_PCT: f32 = 85.0;

// ===== COOLDOWN =====

/// Minimum minutes between two triggered alerts of the same type.
pub const DEFAULT_COOLDOWN_MINUTES: u64 = 30;
