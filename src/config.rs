//! Monitor configuration parameters
//!
//! All tunable thresholds for the FireWatch monitor.  Values can be
//! overridden via an optional JSON config file at startup; missing
//! fields fall back to their defaults.

use serde::{Deserialize, Serialize};

/// Core monitor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Smoke reading strictly above which the smoke alert triggers.
    /// A reading exactly at the threshold does not trigger.
    pub smoke_threshold: i32,
    /// Temperature (Celsius) strictly above which the temperature
    /// alert triggers.
    pub high_temperature_c: i32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            smoke_threshold: 1000,
            high_temperature_c: 50,
        }
    }
}
