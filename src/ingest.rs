//! Ingestion boundary: raw source payloads → typed updates.
//!
//! The remote source delivers JSON objects of the shape
//! `{"FireSensor": 1, "SmokeSensor": 0, "Temperature": 25}`.  Every
//! field is optional; defaults are substituted here, at the boundary,
//! so the evaluator only ever sees a complete, well-typed snapshot.
//!
//! A JSON `null` payload means the dataset is missing upstream and maps
//! to [`SourceUpdate::EmptyDataset`].  A payload that fails to decode
//! is a typed [`DecodeError`] the caller surfaces as a transport notice.

use core::fmt;

use serde::Deserialize;

use crate::app::update::SourceUpdate;
use crate::snapshot::SensorSnapshot;

/// Fire reading substituted when the field is absent (1 = no fire).
const DEFAULT_FIRE: i32 = 1;
/// Temperature substituted when the field is absent.
const DEFAULT_TEMPERATURE: i32 = -1;

/// Wire shape of one snapshot as the source publishes it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawSnapshot {
    #[serde(rename = "FireSensor", default = "default_fire")]
    pub fire: i32,
    #[serde(rename = "SmokeSensor", default)]
    pub smoke: i32,
    #[serde(rename = "Temperature", default = "default_temperature")]
    pub temperature: i32,
}

fn default_fire() -> i32 {
    DEFAULT_FIRE
}

fn default_temperature() -> i32 {
    DEFAULT_TEMPERATURE
}

impl From<RawSnapshot> for SensorSnapshot {
    fn from(raw: RawSnapshot) -> Self {
        Self {
            fire: raw.fire,
            smoke: raw.smoke,
            temperature: raw.temperature,
        }
    }
}

/// Decode one payload from the source.
pub fn decode_update(payload: &str) -> Result<SourceUpdate, DecodeError> {
    match serde_json::from_str::<Option<RawSnapshot>>(payload.trim())? {
        Some(raw) => Ok(SourceUpdate::Snapshot(raw.into())),
        None => Ok(SourceUpdate::EmptyDataset),
    }
}

/// A payload that could not be decoded into a snapshot.
#[derive(Debug)]
pub struct DecodeError(serde_json::Error);

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "undecodable payload: {}", self.0)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        Self(e)
    }
}
