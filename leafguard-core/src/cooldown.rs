//! Cooldown Deduplication
//!
//! ## Overview
//!
//! A plant that is dry at 09:00 is still dry at 09:05. Without suppression
//! every reading would re-trigger the same alert, so a candidate is dropped
//! if an alert of the same type already fired within the cooldown window:
//!
//! ```text
//!            since = now - cooldown                 now
//!  ───────────────┼─────────────────────────────────┼──▶ t
//!   fired here:   │   fired here: suppress          │
//!   pass through  │   (at or after `since`)         │
//! ```
//!
//! ## State Ownership
//!
//! The filter itself is stateless. The alert history belongs to whatever
//! stores triggered alerts and is reached through the [`AlertHistory`]
//! capability, a single lookup the filter calls once per candidate. Lookups
//! are keyed by alert type only, so they are independent of one another and
//! suppressing one type never affects another.
//!
//! The store must reflect every alert committed before the current
//! evaluation started. Read-your-writes is enough.
//!
//! [`MemoryHistory`] is the in-memory implementation used by tests and by
//! single-process deployments.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use crate::{alerts::Alert, thresholds::ThresholdSpec, time::Timestamp};

/// Lookup into the record of triggered alerts
pub trait AlertHistory {
    /// True if an alert of `alert_type` was triggered at or after `since`
    fn recently_triggered(&self, alert_type: &str, since: Timestamp) -> bool;
}

impl<F> AlertHistory for F
where
    F: Fn(&str, Timestamp) -> bool,
{
    fn recently_triggered(&self, alert_type: &str, since: Timestamp) -> bool {
        self(alert_type, since)
    }
}

/// Suppresses repeat alerts of the same type inside a cooldown window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownFilter {
    cooldown_ms: u64,
}

impl CooldownFilter {
    /// Filter with an explicit cooldown in milliseconds
    pub const fn new(cooldown_ms: u64) -> Self {
        Self { cooldown_ms }
    }

    /// Filter using the cooldown configured in the threshold table
    pub const fn from_thresholds(thresholds: &ThresholdSpec) -> Self {
        Self::new(thresholds.cooldown_ms)
    }

    /// Cooldown window length in milliseconds
    pub const fn cooldown_ms(&self) -> u64 {
        self.cooldown_ms
    }

    /// Start of the cooldown window ending at `now`
    pub fn window_start(&self, now: Timestamp) -> Timestamp {
        now.saturating_sub(self.cooldown_ms)
    }

    /// True if `alert` would be suppressed at `now`
    pub fn is_suppressed<H>(&self, alert: &Alert, history: &H, now: Timestamp) -> bool
    where
        H: AlertHistory + ?Sized,
    {
        history.recently_triggered(alert.alert_type(), self.window_start(now))
    }

    /// Drop candidates still inside their cooldown
    ///
    /// Survivors keep their input order and are returned unchanged; the caller
    /// is expected to record them as triggered.
    pub fn filter<I, H>(&self, candidates: I, history: &H, now: Timestamp) -> Vec<Alert>
    where
        I: IntoIterator<Item = Alert>,
        H: AlertHistory + ?Sized,
    {
        candidates
            .into_iter()
            .filter(|alert| {
                let suppressed = self.is_suppressed(alert, history, now);
                if suppressed {
                    log_debug!("suppressing {} (cooldown {}ms)", alert.kind, self.cooldown_ms);
                }
                !suppressed
            })
            .collect()
    }
}

impl Default for CooldownFilter {
    fn default() -> Self {
        Self::from_thresholds(&ThresholdSpec::default())
    }
}

/// In-memory alert history
///
/// Keeps the most recent trigger time per alert type, which is all a
/// cooldown lookup needs.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    last_fired: BTreeMap<String, Timestamp>,
}

impl MemoryHistory {
    /// Empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `alert_type` fired at `at`
    pub fn record(&mut self, alert_type: &str, at: Timestamp) {
        match self.last_fired.get_mut(alert_type) {
            Some(last) => *last = (*last).max(at),
            None => {
                self.last_fired.insert(alert_type.to_string(), at);
            }
        }
    }

    /// Record a batch of triggered alerts
    pub fn record_all<'a, I>(&mut self, alerts: I, at: Timestamp)
    where
        I: IntoIterator<Item = &'a Alert>,
    {
        for alert in alerts {
            self.record(alert.alert_type(), at);
        }
    }

    /// Most recent trigger time for `alert_type`
    pub fn last_fired(&self, alert_type: &str) -> Option<Timestamp> {
        self.last_fired.get(alert_type).copied()
    }

    /// Number of alert types with history
    pub fn len(&self) -> usize {
        self.last_fired.len()
    }

    /// True if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.last_fired.is_empty()
    }
}

impl AlertHistory for MemoryHistory {
    fn recently_triggered(&self, alert_type: &str, since: Timestamp) -> bool {
        self.last_fired(alert_type).map_or(false, |last| last >= since)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::{AlertKind, Severity};
    use crate::time::minutes;

    const NOW: Timestamp = 1_700_000_000_000;

    fn soil_dry() -> Alert {
        Alert::new(AlertKind::SoilDry, Severity::Warning, 1700.0, 1800.0)
    }

    fn temp_high() -> Alert {
        Alert::new(AlertKind::TempHigh, Severity::Warning, 36.0, 35.0)
    }

    #[test]
    fn suppressed_inside_cooldown() {
        let mut history = MemoryHistory::new();
        history.record("soil_dry", NOW - minutes(10));

        let filter = CooldownFilter::new(minutes(30));
        assert!(filter.filter([soil_dry()], &history, NOW).is_empty());
    }

    #[test]
    fn passes_after_cooldown() {
        let mut history = MemoryHistory::new();
        history.record("soil_dry", NOW - minutes(40));

        let filter = CooldownFilter::new(minutes(30));
        assert_eq!(filter.filter([soil_dry()], &history, NOW), [soil_dry()]);
    }

    #[test]
    fn window_start_is_inclusive() {
        let mut history = MemoryHistory::new();
        history.record("soil_dry", NOW - minutes(30));

        let filter = CooldownFilter::new(minutes(30));
        assert!(filter.is_suppressed(&soil_dry(), &history, NOW));
    }

    #[test]
    fn types_are_independent() {
        let mut history = MemoryHistory::new();
        history.record("soil_dry", NOW - minutes(5));

        let filter = CooldownFilter::default();
        let kept = filter.filter([soil_dry(), temp_high()], &history, NOW);
        assert_eq!(kept, [temp_high()]);
    }

    #[test]
    fn order_preserved() {
        let filter = CooldownFilter::default();
        let history = MemoryHistory::new();
        let kept = filter.filter([soil_dry(), temp_high()], &history, NOW);
        assert_eq!(kept, [soil_dry(), temp_high()]);
    }

    #[test]
    fn closure_history() {
        let filter = CooldownFilter::default();
        let history = |alert_type: &str, _since: Timestamp| alert_type == "temp_high";
        let kept = filter.filter([soil_dry(), temp_high()], &history, NOW);
        assert_eq!(kept, [soil_dry()]);
    }

    #[test]
    fn history_keeps_latest() {
        let mut history = MemoryHistory::new();
        history.record("soil_dry", 200);
        history.record("soil_dry", 100);
        assert_eq!(history.last_fired("soil_dry"), Some(200));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn early_clock_does_not_underflow() {
        let filter = CooldownFilter::new(minutes(30));
        assert_eq!(filter.window_start(1000), 0);
    }
}
