//! Property tests for the real-time alert path

use leafguard_core::{
    evaluate, AlertKind, CooldownFilter, MemoryHistory, Metric, Reading, Severity, ThresholdSpec,
};
use proptest::prelude::*;

const NOW: u64 = 1_714_521_600_000;

fn any_reading() -> impl Strategy<Value = Reading> {
    (
        0.0f32..4000.0,
        -10.0f32..50.0,
        proptest::option::of(0.0f32..3000.0),
        0.0f32..100.0,
    )
        .prop_map(|(soil, temp, light, humidity)| Reading {
            soil,
            temp,
            light,
            humidity,
            water: None,
            timestamp: NOW,
        })
}

proptest! {
    #[test]
    fn at_most_one_alert_per_metric_in_order(reading in any_reading()) {
        let alerts = evaluate(&reading, &ThresholdSpec::default());
        prop_assert!(alerts.len() <= 4);

        let metrics: Vec<Metric> = alerts.iter().map(|a| a.kind.metric()).collect();
        let mut sorted = metrics.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(metrics, sorted);
    }

    #[test]
    fn soil_severity_is_monotonic(near in 0.0f32..1800.0, extra in 0.0f32..1800.0) {
        let spec = ThresholdSpec::default();
        let far = near - extra;

        let severity = |soil: f32| {
            evaluate(&Reading::new(soil, 24.0, 60.0, NOW), &spec)
                .iter()
                .find(|a| a.kind == AlertKind::SoilDry)
                .map(|a| a.severity)
        };

        if let (Some(near_sev), Some(far_sev)) = (severity(near), severity(far)) {
            prop_assert!(far_sev >= near_sev);
        }
    }

    #[test]
    fn temp_severity_is_monotonic(near in 35.1f32..60.0, extra in 0.0f32..20.0) {
        let spec = ThresholdSpec::default();
        let severity = |temp: f32| evaluate(&Reading::new(2200.0, temp, 60.0, NOW), &spec)[0].severity;
        prop_assert!(severity(near + extra) >= severity(near));
    }

    #[test]
    fn fresh_history_passes_everything(reading in any_reading()) {
        let candidates = evaluate(&reading, &ThresholdSpec::default());
        let expected: Vec<_> = candidates.iter().cloned().collect();
        let kept = CooldownFilter::default().filter(candidates, &MemoryHistory::new(), NOW);
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn recorded_alerts_are_suppressed_next_time(reading in any_reading(), later_min in 0u64..30) {
        let spec = ThresholdSpec::default();
        let filter = CooldownFilter::from_thresholds(&spec);
        let mut history = MemoryHistory::new();

        let first = filter.filter(evaluate(&reading, &spec), &history, NOW);
        history.record_all(&first, NOW);

        let later = NOW + later_min * 60_000;
        let second = filter.filter(evaluate(&reading, &spec), &history, later);
        prop_assert!(second.is_empty());
    }
}

#[test]
fn cooldown_expires_after_window() {
    let spec = ThresholdSpec::default();
    let filter = CooldownFilter::from_thresholds(&spec);
    let mut history = MemoryHistory::new();
    let dry = Reading::new(1500.0, 24.0, 60.0, NOW);

    let first = filter.filter(evaluate(&dry, &spec), &history, NOW);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].severity, Severity::Critical);
    history.record_all(&first, NOW);

    // 10 minutes later: suppressed
    assert!(filter.filter(evaluate(&dry, &spec), &history, NOW + 10 * 60_000).is_empty());
    // 40 minutes later: passes again
    assert_eq!(filter.filter(evaluate(&dry, &spec), &history, NOW + 40 * 60_000).len(), 1);
}
