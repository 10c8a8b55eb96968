//! Notifiers that do not leave the process

use leafguard_core::{Alert, Severity};
use log::{error, info, warn};

use crate::{ConnectorResult, Notifier};

/// Writes alerts and reports to the `log` facade
///
/// The default when no webhook is configured.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

impl LogNotifier {
    /// Create a log notifier
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, alerts: &[Alert]) -> ConnectorResult<()> {
        for alert in alerts {
            match alert.severity {
                Severity::Critical => error!("{} {}", alert.kind, alert.message),
                Severity::Warning => warn!("{} {}", alert.kind, alert.message),
                Severity::Info => info!("{} {}", alert.kind, alert.message),
            }
        }
        Ok(())
    }

    async fn send_report(&self, report: &str) -> ConnectorResult<()> {
        info!("daily report\n{report}");
        Ok(())
    }
}
