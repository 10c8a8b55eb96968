//! In-memory alert store
//!
//! Backs the cooldown lookups with the core's [`MemoryHistory`] and keeps
//! every triggered alert for inspection. Suitable for tests and for a single
//! process that does not need history to survive a restart.

use leafguard_core::{Alert, AlertHistory, MemoryHistory, Timestamp};
use tokio::sync::RwLock;

use crate::{AlertStore, ConnectorResult};

#[derive(Debug, Default)]
struct Inner {
    history: MemoryHistory,
    triggered: Vec<(Timestamp, Alert)>,
}

/// Alert store held in process memory
#[derive(Debug, Default)]
pub struct MemoryAlertStore {
    inner: RwLock<Inner>,
}

impl MemoryAlertStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with trigger times, e.g. `[("soil_dry", ts)]`
    pub fn with_history<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Timestamp)>,
    {
        let mut history = MemoryHistory::new();
        for (alert_type, at) in entries {
            history.record(alert_type, at);
        }
        Self {
            inner: RwLock::new(Inner {
                history,
                triggered: Vec::new(),
            }),
        }
    }

    /// Every alert recorded so far, oldest first
    pub async fn triggered(&self) -> Vec<(Timestamp, Alert)> {
        self.inner.read().await.triggered.clone()
    }
}

#[async_trait::async_trait]
impl AlertStore for MemoryAlertStore {
    async fn recently_triggered(&self, alert_type: &str, since: Timestamp) -> ConnectorResult<bool> {
        Ok(self.inner.read().await.history.recently_triggered(alert_type, since))
    }

    async fn record(&self, alert: &Alert, at: Timestamp) -> ConnectorResult<()> {
        let mut inner = self.inner.write().await;
        inner.history.record(alert.alert_type(), at);
        inner.triggered.push((at, alert.clone()));
        Ok(())
    }
}
