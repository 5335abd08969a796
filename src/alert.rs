//! Edge-triggered alert evaluation.
//!
//! The evaluator compares the latest snapshot against the previously
//! committed readings and raises an alert only on the transition into a
//! dangerous condition.  A reading that stays dangerous across
//! snapshots does not re-alert until it clears and crosses the
//! threshold again.
//!
//! ## Evaluation lifecycle
//!
//! 1. The service receives a snapshot and calls [`evaluate`].
//! 2. [`evaluate`] produces statuses, zero or more alerts, and the next
//!    [`AlertState`].
//! 3. The service commits `next` unconditionally — even when nothing
//!    fired — so the edge detection window moves forward every time.
//!
//! [`evaluate`] is a pure function: no side effects, total over all
//! integer readings, never fails.

use core::fmt;
use core::fmt::Write as _;

use heapless::{String, Vec};

use crate::config::MonitorConfig;
use crate::snapshot::{AlertState, SensorSnapshot};

/// Maximum alerts a single snapshot can raise (one per signal).
pub const MAX_ALERTS: usize = 3;

/// A newly triggered alert.
///
/// The discriminant order is the evaluation order: fire, then smoke,
/// then temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    /// The fire detector transitioned to "fire detected".
    Fire,
    /// The smoke reading crossed above the configured threshold.
    HighSmoke(i32),
    /// The temperature crossed above the configured limit.
    HighTemperature(i32),
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fire => write!(f, "Fire detected!"),
            Self::HighSmoke(level) => write!(f, "High smoke level: {level}"),
            Self::HighTemperature(deg) => write!(f, "High temperature: {deg}\u{00b0}C"),
        }
    }
}

/// Display strings for the three current sensor conditions.
///
/// Display-only — no alerting semantics attached.  Wording reflects the
/// actual condition and the actual reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSet {
    pub fire: String<48>,
    pub smoke: String<48>,
    pub temperature: String<48>,
}

/// Result of evaluating one snapshot against the committed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Current condition strings for display.
    pub statuses: StatusSet,
    /// Newly triggered alerts, in fire → smoke → temperature order.
    pub alerts: Vec<Alert, MAX_ALERTS>,
    /// The state the caller must commit before the next snapshot.
    pub next: AlertState,
}

/// Evaluate one snapshot against the previously committed state.
pub fn evaluate(
    snapshot: &SensorSnapshot,
    state: &AlertState,
    config: &MonitorConfig,
) -> Evaluation {
    let mut alerts: Vec<Alert, MAX_ALERTS> = Vec::new();

    // Each signal is edge-triggered independently.  Order matters:
    // fire, then smoke, then temperature.
    if snapshot.fire == 0 && state.fire != 0 {
        let _ = alerts.push(Alert::Fire);
    }
    if snapshot.smoke > config.smoke_threshold && state.smoke <= config.smoke_threshold {
        let _ = alerts.push(Alert::HighSmoke(snapshot.smoke));
    }
    if snapshot.temperature > config.high_temperature_c
        && state.temperature <= config.high_temperature_c
    {
        let _ = alerts.push(Alert::HighTemperature(snapshot.temperature));
    }

    Evaluation {
        statuses: build_statuses(snapshot, config),
        alerts,
        next: AlertState::from(*snapshot),
    }
}

fn build_statuses(snapshot: &SensorSnapshot, config: &MonitorConfig) -> StatusSet {
    let mut fire = String::new();
    let _ = if snapshot.fire_detected() {
        write!(fire, "Fire detected!")
    } else {
        write!(fire, "No fire")
    };

    let mut smoke = String::new();
    let _ = if snapshot.smoke > config.smoke_threshold {
        write!(smoke, "High smoke level: {}", snapshot.smoke)
    } else {
        write!(smoke, "Smoke level: {}", snapshot.smoke)
    };

    let mut temperature = String::new();
    let _ = if snapshot.temperature > config.high_temperature_c {
        write!(
            temperature,
            "High temperature: {}\u{00b0}C",
            snapshot.temperature
        )
    } else {
        write!(temperature, "Temperature: {}\u{00b0}C", snapshot.temperature)
    };

    StatusSet {
        fire,
        smoke,
        temperature,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(fire: i32, smoke: i32, temperature: i32) -> SensorSnapshot {
        SensorSnapshot {
            fire,
            smoke,
            temperature,
        }
    }

    fn config() -> MonitorConfig {
        MonitorConfig::default()
    }

    #[test]
    fn fire_alert_fires_on_transition_only() {
        let state = AlertState::default();
        let eval = evaluate(&snap(0, 0, 0), &state, &config());
        assert_eq!(eval.alerts.as_slice(), &[Alert::Fire]);

        // Commit, then deliver the same reading again: no repeat alert.
        let eval2 = evaluate(&snap(0, 0, 0), &eval.next, &config());
        assert!(eval2.alerts.is_empty());
    }

    #[test]
    fn fire_rearms_after_clearing() {
        let state = AlertState::default();
        let e1 = evaluate(&snap(0, 0, 0), &state, &config());
        assert_eq!(e1.alerts.as_slice(), &[Alert::Fire]);

        // Fire clears — no alert on clearing.
        let e2 = evaluate(&snap(1, 0, 0), &e1.next, &config());
        assert!(e2.alerts.is_empty());

        // Fire returns — a fresh edge fires again.
        let e3 = evaluate(&snap(0, 0, 0), &e2.next, &config());
        assert_eq!(e3.alerts.as_slice(), &[Alert::Fire]);
    }

    #[test]
    fn smoke_exactly_at_threshold_does_not_trigger() {
        let state = AlertState::default();
        let eval = evaluate(&snap(1, 1000, 0), &state, &config());
        assert!(eval.alerts.is_empty());

        // One above the threshold does.
        let eval = evaluate(&snap(1, 1001, 0), &state, &config());
        assert_eq!(eval.alerts.as_slice(), &[Alert::HighSmoke(1001)]);
    }

    #[test]
    fn smoke_edge_from_threshold_boundary() {
        // Previous committed reading exactly at the threshold counts as
        // "not dangerous", so crossing above is a fresh edge.
        let state = AlertState {
            fire: 1,
            smoke: 1000,
            temperature: 0,
        };
        let eval = evaluate(&snap(1, 1500, 0), &state, &config());
        assert_eq!(eval.alerts.as_slice(), &[Alert::HighSmoke(1500)]);
    }

    #[test]
    fn smoke_staying_high_does_not_repeat() {
        let state = AlertState {
            fire: 1,
            smoke: 1500,
            temperature: 0,
        };
        let eval = evaluate(&snap(1, 2000, 0), &state, &config());
        assert!(eval.alerts.is_empty());
    }

    #[test]
    fn temperature_exactly_at_limit_does_not_trigger() {
        let state = AlertState::default();
        let eval = evaluate(&snap(1, 0, 50), &state, &config());
        assert!(eval.alerts.is_empty());

        let eval = evaluate(&snap(1, 0, 51), &state, &config());
        assert_eq!(eval.alerts.as_slice(), &[Alert::HighTemperature(51)]);
    }

    #[test]
    fn alert_order_is_fire_smoke_temperature() {
        let state = AlertState::default();
        let eval = evaluate(&snap(0, 1500, 60), &state, &config());
        assert_eq!(
            eval.alerts.as_slice(),
            &[Alert::Fire, Alert::HighSmoke(1500), Alert::HighTemperature(60)]
        );
    }

    #[test]
    fn extreme_readings_are_accepted() {
        // The evaluator is total over all integers — no validation layer.
        let state = AlertState::default();
        let eval = evaluate(&snap(-5, i32::MAX, i32::MIN), &state, &config());
        assert_eq!(eval.alerts.as_slice(), &[Alert::HighSmoke(i32::MAX)]);
        assert_eq!(eval.next.temperature, i32::MIN);
    }

    #[test]
    fn statuses_reflect_conditions_and_real_readings() {
        let state = AlertState::default();
        let eval = evaluate(&snap(0, 1500, 60), &state, &config());
        assert_eq!(eval.statuses.fire.as_str(), "Fire detected!");
        assert_eq!(eval.statuses.smoke.as_str(), "High smoke level: 1500");
        assert_eq!(eval.statuses.temperature.as_str(), "High temperature: 60°C");

        let eval = evaluate(&snap(1, 400, 25), &state, &config());
        assert_eq!(eval.statuses.fire.as_str(), "No fire");
        assert_eq!(eval.statuses.smoke.as_str(), "Smoke level: 400");
        assert_eq!(eval.statuses.temperature.as_str(), "Temperature: 25°C");
    }

    #[test]
    fn alert_messages_render() {
        assert_eq!(Alert::Fire.to_string(), "Fire detected!");
        assert_eq!(Alert::HighSmoke(1500).to_string(), "High smoke level: 1500");
        assert_eq!(
            Alert::HighTemperature(60).to_string(),
            "High temperature: 60°C"
        );
    }

    #[test]
    fn next_state_is_returned_even_when_nothing_fires() {
        let state = AlertState::default();
        let eval = evaluate(&snap(1, 300, 20), &state, &config());
        assert!(eval.alerts.is_empty());
        assert_eq!(
            eval.next,
            AlertState {
                fire: 1,
                smoke: 300,
                temperature: 20
            }
        );
    }
}
