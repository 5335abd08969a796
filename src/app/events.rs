//! Outbound application events.
//!
//! The [`AlertService`](super::service::AlertService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters
//! on the other side decide what to do with them — log to the console,
//! push to a UI layer, forward to a metrics pipeline, etc.

use heapless::Vec;

use crate::alert::{Alert, MAX_ALERTS, StatusSet};
use crate::history::HistoryEntry;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The service started with a fresh baseline state.
    Started,

    /// Statuses recomputed from the latest snapshot.
    StatusUpdated(StatusSet),

    /// One or more alerts were newly triggered by the latest snapshot.
    AlertsRaised(Vec<Alert, MAX_ALERTS>),

    /// A history entry was recorded for the latest snapshot.
    SnapshotRecorded(HistoryEntry),

    /// Transient notice from the source.  No state was changed.
    SourceNotice(Notice),
}

/// Non-fatal conditions reported by the source, shown to the user as
/// transient notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The source responded but the dataset is empty or missing.
    EmptyDataset,
    /// Transport-level failure, with the source's message.
    Transport(String),
}
