//! Webhook Notifier - alerts and digests over HTTP
//!
//! ## Overview
//!
//! Posts a JSON document to a single configured URL. The payload carries a
//! human-readable `text` field, which chat webhooks (Slack, Discord, Teams
//! and friends) render directly, plus the structured alerts for anything
//! that wants to parse them:
//!
//! ```json
//! {
//!   "text": "[critical] Soil is too dry: moisture 1500 is below 1800",
//!   "alerts": [
//!     { "type": "soil_dry", "severity": "critical", "message": "...",
//!       "value": 1500.0, "threshold": 1800.0 }
//!   ]
//! }
//! ```
//!
//! Digest reports are posted as `{ "text": "<report>" }`.
//!
//! ## Delivery
//!
//! ureq is a blocking client, so each attempt runs on tokio's blocking pool.
//! Server errors (5xx, 429) and transport errors are retried with
//! exponential backoff; other 4xx responses fail immediately.

use std::time::Duration;

use leafguard_core::Alert;
use serde_json::json;

use crate::{ConnectorError, ConnectorResult, Notifier};

/// Retries past this attempt wait as long as this one
const MAX_BACKOFF_EXPONENT: u32 = 10;

/// Webhook configuration
#[derive(Clone, Debug)]
pub struct WebhookConfig {
    /// Endpoint to post to
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Optional bearer token
    pub bearer_token: Option<String>,
    /// User agent string
    pub user_agent: String,
}

impl WebhookConfig {
    /// Create new configuration for `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(10),
            max_retries: 3,
            bearer_token: None,
            user_agent: format!("LeafGuard/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set bearer token authentication
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set retry count
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }
}

/// Notifier posting to a webhook
pub struct WebhookNotifier {
    config: WebhookConfig,
    agent: ureq::Agent,
}

impl WebhookNotifier {
    /// Create a notifier, rejecting URLs that are not http(s)
    pub fn new(config: WebhookConfig) -> ConnectorResult<Self> {
        if !config.url.starts_with("http://") && !config.url.starts_with("https://") {
            return Err(ConnectorError::Config(
                "Webhook URL must start with http:// or https://".into(),
            ));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self { config, agent })
    }

    /// Build the alert payload
    pub fn alert_payload(alerts: &[Alert]) -> serde_json::Value {
        let text = alerts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        json!({ "text": text, "alerts": alerts })
    }

    fn request(&self) -> ureq::Request {
        let mut request = self
            .agent
            .post(&self.config.url)
            .set("Content-Type", "application/json");
        if let Some(token) = &self.config.bearer_token {
            request = request.set("Authorization", &format!("Bearer {token}"));
        }
        request
    }

    async fn post(&self, payload: serde_json::Value) -> ConnectorResult<()> {
        let body = serde_json::to_string(&payload)
            .map_err(|e| ConnectorError::Notification(format!("Serialization error: {e}")))?;
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                tokio::time::sleep(delay).await;
            }

            let request = self.request();
            let body = body.clone();
            let response = tokio::task::spawn_blocking(move || request.send_string(&body))
                .await
                .map_err(|e| ConnectorError::Notification(format!("Delivery task failed: {e}")))?;

            match response {
                Ok(_) => return Ok(()),
                Err(ureq::Error::Status(code, resp)) if code >= 500 || code == 429 => {
                    last_error = Some(ConnectorError::Notification(format!(
                        "Server error {code}: {}",
                        resp.into_string().unwrap_or_default()
                    )));
                }
                Err(ureq::Error::Status(code, resp)) => {
                    return Err(ConnectorError::Notification(format!(
                        "Rejected with {code}: {}",
                        resp.into_string().unwrap_or_default()
                    )));
                }
                Err(ureq::Error::Transport(e)) => {
                    last_error = Some(ConnectorError::Notification(e.to_string()));
                }
            }
        }

        Err(last_error.unwrap_or_else(|| ConnectorError::Notification("Unknown error".into())))
    }
}

/// Exponential backoff from 200ms, capped at 102.4s
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(100 * (1u64 << attempt.min(MAX_BACKOFF_EXPONENT)))
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, alerts: &[Alert]) -> ConnectorResult<()> {
        self.post(Self::alert_payload(alerts)).await
    }

    async fn send_report(&self, report: &str) -> ConnectorResult<()> {
        self.post(json!({ "text": report })).await
    }
}
