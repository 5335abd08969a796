//! System wall-clock adapter.

use chrono::{Local, Timelike};

use crate::app::ports::WallClock;
use crate::history::TimeOfDay;

/// Reads the host's local time for history entry timestamps.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl WallClock for SystemClock {
    fn time_of_day(&self) -> TimeOfDay {
        let now = Local::now();
        TimeOfDay {
            hour: now.hour() as u8,
            minute: now.minute() as u8,
            second: now.second() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_yields_valid_time_of_day() {
        let t = SystemClock::new().time_of_day();
        assert!(t.hour < 24);
        assert!(t.minute < 60);
        assert!(t.second < 60);
    }
}
