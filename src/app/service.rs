//! Alert service — the hexagonal core.
//!
//! [`AlertService`] owns the committed alert state, the bounded history
//! log, and the latest status set.  Updates flow in one at a time;
//! notifications, statuses, and history flow out through port traits
//! injected at call sites, making the entire service testable with mock
//! adapters.
//!
//! ```text
//!  SourceUpdate ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                   │       AlertService        │
//!   WallClock  ──▶  │  evaluate · record · commit │ ──▶ NotificationPort
//!                   └──────────────────────────┘
//! ```

use std::fmt::Write as _;

use log::{info, warn};

use crate::alert::{self, Alert, StatusSet};
use crate::config::MonitorConfig;
use crate::history::HistoryLog;
use crate::snapshot::{AlertState, SensorSnapshot};

use super::events::{AppEvent, Notice};
use super::ports::{EventSink, NotificationPort, WallClock};
use super::update::SourceUpdate;

/// Fixed banner for every alert notification.
pub const ALERT_TITLE: &str = "ALERT!";

// ───────────────────────────────────────────────────────────────
// AlertService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AlertService {
    config: MonitorConfig,
    /// Readings committed after the last evaluated snapshot.
    state: AlertState,
    history: HistoryLog,
    /// Statuses from the latest snapshot; `None` until one arrives.
    statuses: Option<StatusSet>,
    snapshots_seen: u64,
}

impl AlertService {
    /// Construct the service with a safe baseline state.
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            state: AlertState::default(),
            history: HistoryLog::new(),
            statuses: None,
            snapshots_seen: 0,
        }
    }

    /// Announce startup through the sink.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!(
            "AlertService started (smoke > {}, temperature > {}\u{00b0}C)",
            self.config.smoke_threshold, self.config.high_temperature_c
        );
    }

    // ── Per-update orchestration ──────────────────────────────

    /// Process one delivery from the source to completion.
    ///
    /// Updates must arrive serialized — the channel consumer loop calls
    /// this for one update at a time, which is what keeps the state and
    /// history commits race-free without extra locking.
    pub fn handle_update(
        &mut self,
        update: SourceUpdate,
        clock: &impl WallClock,
        notifier: &mut impl NotificationPort,
        sink: &mut impl EventSink,
    ) {
        match update {
            SourceUpdate::Snapshot(snapshot) => {
                self.handle_snapshot(&snapshot, clock, notifier, sink);
            }
            SourceUpdate::EmptyDataset => {
                warn!("source delivered an empty dataset");
                sink.emit(&AppEvent::SourceNotice(Notice::EmptyDataset));
            }
            SourceUpdate::TransportError(message) => {
                warn!("source transport error: {message}");
                sink.emit(&AppEvent::SourceNotice(Notice::Transport(message)));
            }
            SourceUpdate::Closed => {
                info!("source closed");
            }
        }
    }

    fn handle_snapshot(
        &mut self,
        snapshot: &SensorSnapshot,
        clock: &impl WallClock,
        notifier: &mut impl NotificationPort,
        sink: &mut impl EventSink,
    ) {
        self.snapshots_seen += 1;

        // 1. Pure evaluation against the previously committed state.
        let eval = alert::evaluate(snapshot, &self.state, &self.config);

        sink.emit(&AppEvent::StatusUpdated(eval.statuses.clone()));

        // 2. One notification per non-empty alert batch.
        if !eval.alerts.is_empty() {
            let body = join_alerts(&eval.alerts);
            notifier.notify(ALERT_TITLE, &body);
            sink.emit(&AppEvent::AlertsRaised(eval.alerts.clone()));
        }

        // 3. Record the snapshot in the bounded history.
        self.history = self.history.record(snapshot, clock.time_of_day());
        if let Some(entry) = self.history.entries().first() {
            sink.emit(&AppEvent::SnapshotRecorded(entry.clone()));
        }

        // 4. Commit unconditionally so the edge window moves forward.
        self.state = eval.next;
        self.statuses = Some(eval.statuses);
    }

    // ── Queries ───────────────────────────────────────────────

    /// Statuses from the latest snapshot, if any has arrived.
    pub fn statuses(&self) -> Option<&StatusSet> {
        self.statuses.as_ref()
    }

    /// The bounded history log, newest first.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The committed alert state.
    pub fn state(&self) -> AlertState {
        self.state
    }

    /// Total snapshots evaluated since startup.
    pub fn snapshots_seen(&self) -> u64 {
        self.snapshots_seen
    }

    /// Clone of the live configuration.
    pub fn current_config(&self) -> MonitorConfig {
        self.config.clone()
    }
}

/// Join alert messages with newline separators into one notification body.
fn join_alerts(alerts: &[Alert]) -> String {
    let mut body = String::new();
    for (i, alert) in alerts.iter().enumerate() {
        if i > 0 {
            body.push('\n');
        }
        let _ = write!(body, "{alert}");
    }
    body
}
