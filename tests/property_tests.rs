//! Property tests for the evaluator and history invariants.

use firewatch::alert::{Alert, evaluate};
use firewatch::config::MonitorConfig;
use firewatch::history::{HISTORY_CAPACITY, HistoryLog, TimeOfDay};
use firewatch::snapshot::{AlertState, SensorSnapshot};
use proptest::prelude::*;

fn arb_snapshot() -> impl Strategy<Value = SensorSnapshot> {
    (any::<i32>(), any::<i32>(), any::<i32>()).prop_map(|(fire, smoke, temperature)| {
        SensorSnapshot {
            fire,
            smoke,
            temperature,
        }
    })
}

fn noon() -> TimeOfDay {
    TimeOfDay {
        hour: 12,
        minute: 0,
        second: 0,
    }
}

proptest! {
    /// The evaluator is total: any integer readings produce statuses,
    /// a bounded alert batch, and a committed next state.
    #[test]
    fn evaluator_is_total(snapshot in arb_snapshot(), prev in arb_snapshot()) {
        let config = MonitorConfig::default();
        let state = AlertState::from(prev);
        let eval = evaluate(&snapshot, &state, &config);

        prop_assert!(eval.alerts.len() <= 3);
        prop_assert!(!eval.statuses.fire.is_empty());
        prop_assert!(!eval.statuses.smoke.is_empty());
        prop_assert!(!eval.statuses.temperature.is_empty());
        prop_assert_eq!(eval.next, AlertState::from(snapshot));
    }

    /// Re-evaluating an identical snapshot after committing never
    /// re-alerts: all edges were consumed by the first evaluation.
    #[test]
    fn committed_snapshot_never_realerts(snapshot in arb_snapshot(), prev in arb_snapshot()) {
        let config = MonitorConfig::default();
        let first = evaluate(&snapshot, &AlertState::from(prev), &config);
        let second = evaluate(&snapshot, &first.next, &config);
        prop_assert!(
            second.alerts.is_empty(),
            "unchanged readings must not re-alert: {:?}",
            second.alerts
        );
    }

    /// Each alert appears exactly when its edge rule holds, and the
    /// batch order is always fire, smoke, temperature.
    #[test]
    fn alerts_match_edge_rules_in_order(snapshot in arb_snapshot(), prev in arb_snapshot()) {
        let config = MonitorConfig::default();
        let state = AlertState::from(prev);
        let eval = evaluate(&snapshot, &state, &config);

        let fire_edge = snapshot.fire == 0 && state.fire != 0;
        let smoke_edge = snapshot.smoke > config.smoke_threshold
            && state.smoke <= config.smoke_threshold;
        let temp_edge = snapshot.temperature > config.high_temperature_c
            && state.temperature <= config.high_temperature_c;

        let mut expected: Vec<Alert> = Vec::new();
        if fire_edge {
            expected.push(Alert::Fire);
        }
        if smoke_edge {
            expected.push(Alert::HighSmoke(snapshot.smoke));
        }
        if temp_edge {
            expected.push(Alert::HighTemperature(snapshot.temperature));
        }
        prop_assert_eq!(eval.alerts.as_slice(), expected.as_slice());
    }

    /// History length never exceeds capacity for arbitrary sequences,
    /// and the newest entry always reflects the last snapshot.
    #[test]
    fn history_is_bounded_and_newest_first(
        snapshots in proptest::collection::vec(arb_snapshot(), 1..=30),
    ) {
        let mut log = HistoryLog::new();
        for snapshot in &snapshots {
            log = log.record(snapshot, noon());
        }
        prop_assert!(log.len() <= HISTORY_CAPACITY);
        prop_assert_eq!(log.len(), snapshots.len().min(HISTORY_CAPACITY));

        let last = snapshots.last().unwrap();
        let expected = firewatch::history::format_entry(last, noon());
        prop_assert_eq!(log.entries()[0].as_str(), expected.as_str());
    }
}
