//! Log-based notification adapter.
//!
//! Implements [`NotificationPort`] by writing the alert banner and body
//! to the logger at warn level.  A desktop or mobile push adapter would
//! implement the same trait against a real notification surface.

use log::warn;

use crate::app::ports::NotificationPort;

/// Adapter that surfaces notifications through the logger.
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationPort for LogNotifier {
    fn notify(&mut self, title: &str, body: &str) {
        warn!("NOTIFY | {title}");
        for line in body.lines() {
            warn!("NOTIFY |   {line}");
        }
    }
}
