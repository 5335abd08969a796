//! Bounded most-recent-first history of formatted snapshot entries.
//!
//! The log holds at most [`HISTORY_CAPACITY`] entries, newest first.
//! Recording into a full log drops the oldest entry.  [`HistoryLog::record`]
//! returns a new log rather than mutating, so the commit point stays
//! with the caller, same as the alert state.

use core::fmt;
use core::fmt::Write as _;

use heapless::{String, Vec};

use crate::snapshot::SensorSnapshot;

/// Maximum entries retained.  Inserting beyond this evicts the oldest.
pub const HISTORY_CAPACITY: usize = 10;

/// One formatted history line, e.g.
/// `[12:41:03] Fire: NO | Smoke: 420 | Temp: 26°C`.
pub type HistoryEntry = String<96>;

/// Wall-clock time of day used to stamp history entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Fixed-capacity log of formatted entries, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry, HISTORY_CAPACITY>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new log with `snapshot` prepended.
    ///
    /// When the log is already at capacity the oldest entry is dropped
    /// first, so the result never exceeds [`HISTORY_CAPACITY`].
    pub fn record(&self, snapshot: &SensorSnapshot, time: TimeOfDay) -> Self {
        let mut next = self.clone();
        if next.entries.is_full() {
            let _ = next.entries.pop();
        }
        // Cannot fail: an element was just popped if the log was full.
        let _ = next.entries.insert(0, format_entry(snapshot, time));
        next
    }

    /// Entries newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format one snapshot as a history line.
///
/// Total over all valid snapshots: the entry capacity covers the widest
/// possible integer readings.
pub fn format_entry(snapshot: &SensorSnapshot, time: TimeOfDay) -> HistoryEntry {
    let mut entry = HistoryEntry::new();
    let _ = write!(
        entry,
        "[{}] Fire: {} | Smoke: {} | Temp: {}\u{00b0}C",
        time,
        if snapshot.fire_detected() { "YES" } else { "NO" },
        snapshot.smoke,
        snapshot.temperature,
    );
    entry
}
