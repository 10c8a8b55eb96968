//! Collaborators for the LeafGuard core
//!
//! ## Overview
//!
//! `leafguard-core` only makes decisions. Everything that touches the outside
//! world lives here, behind three small traits:
//!
//! | Trait             | Used by          | Responsibility                          |
//! |-------------------|------------------|-----------------------------------------|
//! | [`AlertStore`]    | real-time path   | cooldown lookups, recording triggers    |
//! | [`Notifier`]      | both paths       | delivering alerts and digest reports    |
//! | [`WeatherSource`] | digest path      | optional local weather                  |
//!
//! [`AlertMonitor`](monitor::AlertMonitor) wires them to the core and runs
//! both paths.
//!
//! ## Partial Success
//!
//! A failed lookup, a failed write and a failed notification are independent.
//! None of them stops the rest of the batch; each is collected in the
//! outcome so the caller can report something like
//! `alerts_triggered=2, notification_sent=false`.
//!
//! A failed weather fetch is not a failure at all: the digest is sent
//! without its weather section.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use leafguard_connectors::{memory::MemoryAlertStore, monitor::AlertMonitor, notify::LogNotifier};
//! use leafguard_core::{Reading, ThresholdSpec};
//!
//! # async fn example() {
//! let monitor = AlertMonitor::new(
//!     ThresholdSpec::default(),
//!     Arc::new(MemoryAlertStore::new()),
//!     Arc::new(LogNotifier::new()),
//! );
//!
//! let reading = Reading::new(1500.0, 22.0, 60.0, 1_714_521_600_000);
//! let outcome = monitor.check_reading(&reading, reading.timestamp).await;
//! println!("{outcome}");
//! # }
//! ```

pub mod config;
pub mod memory;
pub mod monitor;
pub mod notify;

#[cfg(feature = "http")]
pub mod webhook;

// Re-export common types
pub use config::MonitorConfig;
pub use memory::MemoryAlertStore;
pub use monitor::{AlertMonitor, CheckOutcome, DigestOutcome};
pub use notify::LogNotifier;

#[cfg(feature = "http")]
pub use webhook::{WebhookConfig, WebhookNotifier};

use leafguard_core::{Alert, ThresholdError, Timestamp, WeatherAdvisory};
use thiserror::Error;

/// Common connector errors
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Weather error: {0}")]
    Weather(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid thresholds: {0}")]
    Thresholds(ThresholdError),
}

impl From<ThresholdError> for ConnectorError {
    fn from(err: ThresholdError) -> Self {
        ConnectorError::Thresholds(err)
    }
}

/// Result type for connector operations
pub type ConnectorResult<T> = Result<T, ConnectorError>;

/// Record of triggered alerts
///
/// Lookups must see every alert recorded before the current evaluation
/// started.
#[async_trait::async_trait]
pub trait AlertStore: Send + Sync {
    /// True if an alert of `alert_type` was recorded at or after `since`
    async fn recently_triggered(&self, alert_type: &str, since: Timestamp) -> ConnectorResult<bool>;

    /// Record that `alert` was triggered at `at`
    async fn record(&self, alert: &Alert, at: Timestamp) -> ConnectorResult<()>;
}

/// Delivery of alerts and reports to people
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a batch of newly triggered alerts
    async fn notify(&self, alerts: &[Alert]) -> ConnectorResult<()>;

    /// Deliver a formatted digest report
    async fn send_report(&self, report: &str) -> ConnectorResult<()>;
}

/// Local weather for the digest
#[async_trait::async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the current advisory
    async fn fetch(&self) -> ConnectorResult<WeatherAdvisory>;
}
