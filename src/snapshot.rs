//! Sensor snapshot and committed alert-state value types.
//!
//! Both types are plain `Copy` values.  The evaluator never mutates
//! them; it returns the next [`AlertState`] for the caller to commit,
//! so the commit point stays in one place (the service).

/// A point-in-time set of sensor readings delivered atomically by the
/// source.
///
/// Readings are accepted as-is — any integer is valid, including
/// negative or absent-default values substituted at the ingestion
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSnapshot {
    /// Fire detector output.  The sensor reports `1` when no fire is
    /// present and `0` when fire is detected.
    pub fire: i32,
    /// Raw smoke reading.  Higher means more smoke.
    pub smoke: i32,
    /// Temperature in degrees Celsius.
    pub temperature: i32,
}

impl SensorSnapshot {
    /// True when the fire detector reports fire (`fire == 0`).
    pub fn fire_detected(&self) -> bool {
        self.fire == 0
    }
}

/// The previously committed readings used for edge detection.
///
/// Updated unconditionally after every snapshot is evaluated, whether
/// or not an alert fired — an unchanged dangerous reading must not
/// re-alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertState {
    pub fire: i32,
    pub smoke: i32,
    pub temperature: i32,
}

impl Default for AlertState {
    /// Safe baseline before the first snapshot arrives: no fire, zero
    /// smoke, zero temperature.
    fn default() -> Self {
        Self {
            fire: 1,
            smoke: 0,
            temperature: 0,
        }
    }
}

impl From<SensorSnapshot> for AlertState {
    fn from(snapshot: SensorSnapshot) -> Self {
        Self {
            fire: snapshot.fire,
            smoke: snapshot.smoke,
            temperature: snapshot.temperature,
        }
    }
}
