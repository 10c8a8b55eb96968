//! Real-time and digest runners
//!
//! ## Real-Time Path
//!
//! ```text
//! reading ─▶ evaluate ─▶ history lookups ─▶ CooldownFilter ─▶ record ─▶ notify
//!                          (per candidate)                   (per alert) (once)
//! ```
//!
//! History lookups are made up front, one per candidate, and their answers
//! are handed to the core [`CooldownFilter`] as an in-memory capability. A
//! lookup that fails is reported and the alert is let through.
//!
//! ## Digest Path
//!
//! ```text
//! window ─▶ compute_statistics ─▶ assess_health ─▶ compose_report ─▶ send
//!                                    weather (optional) ──┘
//! ```
//!
//! [`AlertMonitor::digest_at`] first trims the readings to the configured
//! digest window ending at `now` and dates the report with the UTC day of
//! `now`. [`AlertMonitor::digest`] takes an already selected window.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use leafguard_core::{
    assess_health, compose_report, compute_statistics, constants::time::DEFAULT_DIGEST_WINDOW_MS,
    evaluate, time::utc_date, Alert, CooldownFilter, DigestInput, HealthAdvisory, Reading,
    ThresholdSpec, Timestamp, WeatherAdvisory, WindowStats,
};
use log::{debug, info, warn};

use crate::{
    config::MonitorConfig, notify::LogNotifier, AlertStore, ConnectorError, ConnectorResult,
    Notifier, WeatherSource,
};

/// Result of checking one reading
#[derive(Debug)]
pub struct CheckOutcome {
    /// Alerts that passed the cooldown, in evaluation order
    pub alerts: Vec<Alert>,
    /// Candidates dropped by the cooldown
    pub suppressed: usize,
    /// True if the notifier accepted the batch
    pub notification_sent: bool,
    /// Every collaborator failure, in the order it happened
    pub failures: Vec<ConnectorError>,
}

impl CheckOutcome {
    /// Number of alerts that triggered
    pub fn alerts_triggered(&self) -> usize {
        self.alerts.len()
    }

    /// True if no collaborator failed
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alerts_triggered={}, notification_sent={}",
            self.alerts_triggered(),
            self.notification_sent
        )
    }
}

/// Result of one digest run
#[derive(Debug)]
pub struct DigestOutcome {
    /// Window statistics
    pub stats: WindowStats,
    /// Health advisories, in report order
    pub advisories: Vec<HealthAdvisory>,
    /// Formatted report
    pub report: String,
    /// True if weather was fetched and included
    pub weather_included: bool,
    /// True if the notifier accepted the report
    pub report_sent: bool,
    /// Delivery failures
    pub failures: Vec<ConnectorError>,
}

/// Runs the real-time and digest paths against the collaborators
pub struct AlertMonitor {
    thresholds: ThresholdSpec,
    cooldown: CooldownFilter,
    digest_window_ms: u64,
    store: Arc<dyn AlertStore>,
    notifier: Arc<dyn Notifier>,
    weather: Option<Arc<dyn WeatherSource>>,
}

impl AlertMonitor {
    /// Monitor with no weather source
    pub fn new(
        thresholds: ThresholdSpec,
        store: Arc<dyn AlertStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            thresholds,
            cooldown: CooldownFilter::from_thresholds(&thresholds),
            digest_window_ms: DEFAULT_DIGEST_WINDOW_MS,
            store,
            notifier,
            weather: None,
        }
    }

    /// Build from configuration
    ///
    /// Notifications go to the configured webhook when the `http` feature is
    /// enabled, and to the log otherwise.
    pub fn from_config(config: &MonitorConfig, store: Arc<dyn AlertStore>) -> ConnectorResult<Self> {
        config.validate()?;
        Ok(Self::new(config.thresholds, store, notifier_for(config)?)
            .with_digest_window(config.digest_window))
    }

    /// Set how far back [`digest_at`](Self::digest_at) looks
    pub fn with_digest_window(mut self, window: Duration) -> Self {
        self.digest_window_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Digest window length
    pub fn digest_window(&self) -> Duration {
        Duration::from_millis(self.digest_window_ms)
    }

    /// Attach a weather source for digests
    pub fn with_weather(mut self, source: Arc<dyn WeatherSource>) -> Self {
        self.weather = Some(source);
        self
    }

    /// Threshold table in use
    pub fn thresholds(&self) -> &ThresholdSpec {
        &self.thresholds
    }

    /// Evaluate one reading, apply the cooldown, record and notify
    pub async fn check_reading(&self, reading: &Reading, now: Timestamp) -> CheckOutcome {
        let candidates = evaluate(reading, &self.thresholds);
        let candidate_count = candidates.len();
        let since = self.cooldown.window_start(now);
        let mut failures = Vec::new();

        // Lookups are independent per type, order does not matter. A type
        // whose lookup failed has no entry and is let through.
        let mut recent: BTreeMap<&'static str, bool> = BTreeMap::new();
        for alert in &candidates {
            match self.store.recently_triggered(alert.alert_type(), since).await {
                Ok(hit) => {
                    recent.insert(alert.alert_type(), hit);
                }
                Err(err) => {
                    warn!("history lookup for {} failed, not suppressing: {err}", alert.kind);
                    failures.push(err);
                }
            }
        }

        // The filter derives the same window start from `now`; answers were
        // fetched for `since`, so any other start has no answer.
        let history = |alert_type: &str, window_start: Timestamp| {
            window_start == since && recent.get(alert_type).copied().unwrap_or(false)
        };
        let alerts = self.cooldown.filter(candidates, &history, now);
        let suppressed = candidate_count - alerts.len();

        for alert in &alerts {
            if let Err(err) = self.store.record(alert, now).await {
                warn!("failed to record {}: {err}", alert.kind);
                failures.push(err);
            }
        }

        let notification_sent = if alerts.is_empty() {
            false
        } else {
            match self.notifier.notify(&alerts).await {
                Ok(()) => true,
                Err(err) => {
                    warn!("failed to deliver {} alert(s): {err}", alerts.len());
                    failures.push(err);
                    false
                }
            }
        };

        let outcome = CheckOutcome {
            alerts,
            suppressed,
            notification_sent,
            failures,
        };
        if outcome.alerts_triggered() > 0 || outcome.suppressed > 0 {
            info!("{outcome}, suppressed={}", outcome.suppressed);
        } else {
            debug!("{outcome}");
        }
        outcome
    }

    /// Readings inside the digest window ending at `now`, inclusive at both ends
    pub fn select_window(&self, readings: &[Reading], now: Timestamp) -> Vec<Reading> {
        let since = now.saturating_sub(self.digest_window_ms);
        readings
            .iter()
            .filter(|r| (since..=now).contains(&r.timestamp))
            .copied()
            .collect()
    }

    /// Build and send the digest for the window ending at `now`
    pub async fn digest_at(&self, readings: &[Reading], now: Timestamp) -> DigestOutcome {
        let window = self.select_window(readings, now);
        let date = utc_date(now).unwrap_or(NaiveDate::MIN);
        debug!(
            "digest window for {date}: {} of {} readings",
            window.len(),
            readings.len()
        );
        self.digest(&window, date).await
    }

    /// Build and send the digest for a window of readings
    pub async fn digest(&self, window: &[Reading], date: NaiveDate) -> DigestOutcome {
        let stats = compute_statistics(window);
        let advisories = assess_health(&stats, &self.thresholds);
        let weather = self.fetch_weather().await;

        let report = compose_report(&DigestInput {
            date,
            stats: &stats,
            advisories: &advisories,
            weather: weather.as_ref(),
        });

        let mut failures = Vec::new();
        let report_sent = match self.notifier.send_report(&report).await {
            Ok(()) => true,
            Err(err) => {
                warn!("failed to deliver digest for {date}: {err}");
                failures.push(err);
                false
            }
        };

        info!(
            "digest for {date}: readings={}, advisories={}, report_sent={report_sent}",
            stats.reading_count,
            advisories.len()
        );

        DigestOutcome {
            stats,
            advisories,
            report,
            weather_included: weather.is_some(),
            report_sent,
            failures,
        }
    }

    /// Weather is optional: any failure just drops the section
    async fn fetch_weather(&self) -> Option<WeatherAdvisory> {
        let source = self.weather.as_ref()?;
        match source.fetch().await {
            Ok(advisory) => Some(advisory),
            Err(err) => {
                warn!("weather unavailable, omitting from digest: {err}");
                None
            }
        }
    }
}

#[cfg(feature = "http")]
fn notifier_for(config: &MonitorConfig) -> ConnectorResult<Arc<dyn Notifier>> {
    use crate::webhook::{WebhookConfig, WebhookNotifier};

    match &config.webhook_url {
        Some(url) => Ok(Arc::new(WebhookNotifier::new(WebhookConfig::new(url.clone()))?)),
        None => Ok(Arc::new(LogNotifier::new())),
    }
}

#[cfg(not(feature = "http"))]
fn notifier_for(config: &MonitorConfig) -> ConnectorResult<Arc<dyn Notifier>> {
    if config.webhook_url.is_some() {
        warn!("webhook configured but the http feature is disabled, logging notifications instead");
    }
    Ok(Arc::new(LogNotifier::new()))
}
