//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger.  A UI-facing adapter would implement the same trait.

use log::{info, warn};

use crate::app::events::{AppEvent, Notice};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | baseline committed");
            }
            AppEvent::StatusUpdated(s) => {
                info!("STATUS | {} | {} | {}", s.fire, s.smoke, s.temperature);
            }
            AppEvent::AlertsRaised(alerts) => {
                info!("ALERT | {} newly triggered", alerts.len());
            }
            AppEvent::SnapshotRecorded(entry) => {
                info!("HISTORY | {entry}");
            }
            AppEvent::SourceNotice(Notice::EmptyDataset) => {
                warn!("NOTICE | no data found at the source");
            }
            AppEvent::SourceNotice(Notice::Transport(message)) => {
                warn!("NOTICE | source error: {message}");
            }
        }
    }
}
