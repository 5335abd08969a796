//! Port traits — the boundary between the alert core and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AlertService (domain)
//! ```
//!
//! Driven adapters (notification surface, wall clock, event sinks)
//! implement these traits.  The
//! [`AlertService`](super::service::AlertService) consumes them via
//! generics, so the domain core never touches the platform directly.

use crate::app::events::AppEvent;
use crate::history::TimeOfDay;

// ───────────────────────────────────────────────────────────────
// Notification port (domain → user-visible alert surface)
// ───────────────────────────────────────────────────────────────

/// Raises exactly one user-visible notification per call.
///
/// The core calls this once per non-empty alert batch: `title` is the
/// fixed alert banner and `body` is the newline-joined list of alert
/// messages.  An empty batch triggers no call.
pub trait NotificationPort {
    fn notify(&mut self, title: &str, body: &str);
}

// ───────────────────────────────────────────────────────────────
// Wall-clock port (domain ← platform time)
// ───────────────────────────────────────────────────────────────

/// Provides the wall-clock time used to stamp history entries.
pub trait WallClock {
    fn time_of_day(&self) -> TimeOfDay;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / UI)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go (console log, UI state, etc.).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}
