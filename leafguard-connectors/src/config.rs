//! Deployment configuration
//!
//! Thresholds plus the environment-level settings the core never sees:
//! where to send notifications and how far back a digest looks. Built with
//! the builder methods or loaded from `LEAFGUARD_*` environment variables.

use std::time::Duration;

use leafguard_core::{constants::time::DEFAULT_DIGEST_WINDOW_MS, ThresholdSpec};

use crate::{ConnectorError, ConnectorResult};

/// Webhook endpoint for alerts and digests
pub const ENV_WEBHOOK_URL: &str = "LEAFGUARD_WEBHOOK_URL";
/// Cooldown override in minutes
pub const ENV_COOLDOWN_MINUTES: &str = "LEAFGUARD_COOLDOWN_MINUTES";
/// Digest window override in hours
pub const ENV_DIGEST_WINDOW_HOURS: &str = "LEAFGUARD_DIGEST_WINDOW_HOURS";

/// Monitor configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Threshold table and cooldown
    pub thresholds: ThresholdSpec,
    /// Where notifications are posted; logged only when unset
    pub webhook_url: Option<String>,
    /// Length of the digest window
    pub digest_window: Duration,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdSpec::default(),
            webhook_url: None,
            digest_window: Duration::from_millis(DEFAULT_DIGEST_WINDOW_MS),
        }
    }
}

impl MonitorConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom threshold table
    pub fn thresholds(mut self, thresholds: ThresholdSpec) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Post notifications to `url`
    pub fn webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    /// Set the digest window in hours
    pub fn digest_window_hours(mut self, hours: u64) -> Self {
        self.digest_window = Duration::from_secs(hours * 3600);
        self
    }

    /// Load from the process environment
    pub fn from_env() -> ConnectorResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup, falling back to defaults for missing keys
    pub fn from_lookup<F>(lookup: F) -> ConnectorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_WEBHOOK_URL).filter(|v| !v.is_empty()) {
            config.webhook_url = Some(url);
        }
        if let Some(minutes) = lookup(ENV_COOLDOWN_MINUTES) {
            let minutes = parse_number(ENV_COOLDOWN_MINUTES, &minutes)?;
            config.thresholds = config.thresholds.with_cooldown_minutes(minutes);
        }
        if let Some(hours) = lookup(ENV_DIGEST_WINDOW_HOURS) {
            let hours = parse_number(ENV_DIGEST_WINDOW_HOURS, &hours)?;
            config = config.digest_window_hours(hours);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the configuration before starting
    pub fn validate(&self) -> ConnectorResult<()> {
        self.thresholds.validate()?;

        if let Some(url) = &self.webhook_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConnectorError::Config(
                    "Webhook URL must start with http:// or https://".into(),
                ));
            }
        }
        if self.digest_window.is_zero() {
            return Err(ConnectorError::Config("Digest window must be greater than zero".into()));
        }
        Ok(())
    }
}

fn parse_number(key: &str, value: &str) -> ConnectorResult<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| ConnectorError::Config(format!("{key} must be a whole number, got {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = MonitorConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.thresholds, ThresholdSpec::default());
        assert!(config.webhook_url.is_none());
        assert_eq!(config.digest_window, Duration::from_secs(24 * 3600));
    }

    #[test]
    fn reads_overrides() {
        let config = MonitorConfig::from_lookup(lookup(&[
            (ENV_WEBHOOK_URL, "https://hooks.example.com/plant"),
            (ENV_COOLDOWN_MINUTES, "45"),
            (ENV_DIGEST_WINDOW_HOURS, "12"),
        ]))
        .unwrap();

        assert_eq!(config.webhook_url.as_deref(), Some("https://hooks.example.com/plant"));
        assert_eq!(config.thresholds.cooldown_ms, 45 * 60 * 1000);
        assert_eq!(config.digest_window, Duration::from_secs(12 * 3600));
    }

    #[test]
    fn rejects_bad_values() {
        let err = MonitorConfig::from_lookup(lookup(&[(ENV_COOLDOWN_MINUTES, "soon")])).unwrap_err();
        assert!(matches!(err, ConnectorError::Config(_)));

        let err = MonitorConfig::from_lookup(lookup(&[(ENV_COOLDOWN_MINUTES, "0")])).unwrap_err();
        assert!(matches!(err, ConnectorError::Thresholds(_)));

        let err = MonitorConfig::from_lookup(lookup(&[(ENV_WEBHOOK_URL, "hooks.example.com")]))
            .unwrap_err();
        assert!(matches!(err, ConnectorError::Config(_)));
    }
}
