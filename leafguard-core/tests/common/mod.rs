//! Common test utilities and reading generators for integration tests
//!
//! This module provides:
//! - Deterministic pseudo-random reading generators with a daily light cycle
//! - Fixtures for common plant scenarios (drying out, heat wave, healthy)

#![allow(dead_code)]

use leafguard_core::{
    constants::time::{MS_PER_HOUR, MS_PER_MINUTE},
    Reading, Timestamp,
};

/// 2024-05-01T00:00:00Z
pub const DAY_START: Timestamp = 1_714_521_600_000;

/// Deterministic reading generator
pub struct ReadingGenerator {
    start: Timestamp,
    interval_ms: u64,
    seed: u32,
}

impl ReadingGenerator {
    /// Generator producing one reading every `interval_minutes` from `start`
    pub fn new(start: Timestamp, interval_minutes: u64) -> Self {
        Self {
            start,
            interval_ms: interval_minutes * MS_PER_MINUTE,
            seed: 42,
        }
    }

    /// A stable, healthy day: soil in range, mild temperature, daylight curve
    pub fn healthy_day(&mut self) -> Vec<Reading> {
        self.series(24 * 60 / (self.interval_ms / MS_PER_MINUTE) as usize, |g, _, ts| {
            Reading::new(
                2200.0 + g.noise(20.0),
                23.0 + g.noise(0.5),
                60.0 + g.noise(2.0),
                ts,
            )
            .with_light(g.daylight(ts))
            .with_water(70.0)
        })
    }

    /// Soil losing moisture linearly from `from` to `to` over `count` readings
    pub fn drying_soil(&mut self, count: usize, from: f32, to: f32) -> Vec<Reading> {
        self.series(count, |_, i, ts| {
            let progress = i as f32 / (count.max(2) - 1) as f32;
            Reading::new(from + (to - from) * progress, 24.0, 55.0, ts).with_light(900.0)
        })
    }

    /// Temperature climbing linearly from `from` to `to` over `count` readings
    pub fn heat_wave(&mut self, count: usize, from: f32, to: f32) -> Vec<Reading> {
        self.series(count, |_, i, ts| {
            let progress = i as f32 / (count.max(2) - 1) as f32;
            Reading::new(2200.0, from + (to - from) * progress, 55.0, ts).with_light(1000.0)
        })
    }

    fn series<F>(&mut self, count: usize, mut make: F) -> Vec<Reading>
    where
        F: FnMut(&mut Self, usize, Timestamp) -> Reading,
    {
        (0..count)
            .map(|i| {
                let ts = self.start + i as u64 * self.interval_ms;
                make(self, i, ts)
            })
            .collect()
    }

    /// Light following a rough daylight curve: dark at night, peak at noon
    fn daylight(&mut self, ts: Timestamp) -> f32 {
        let hour = (ts % (24 * MS_PER_HOUR)) / MS_PER_HOUR;
        if (7..19).contains(&hour) {
            let from_noon = (hour as f32 - 12.5).abs();
            1800.0 - from_noon * 100.0 + self.noise(30.0)
        } else {
            0.0
        }
    }

    /// Symmetric noise in [-amplitude, amplitude]
    fn noise(&mut self, amplitude: f32) -> f32 {
        (self.random_float() * 2.0 - 1.0) * amplitude
    }

    /// Linear congruential generator for reproducible tests
    fn random_float(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        ((self.seed >> 16) & 0x7fff) as f32 / 32_768.0
    }
}
