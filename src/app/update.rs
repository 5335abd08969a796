//! Inbound updates to the application service.
//!
//! These represent deliveries from the external real-time source that
//! the [`AlertService`](super::service::AlertService) interprets and
//! acts upon.  Defaulting and decoding happen at the ingestion boundary
//! ([`crate::ingest`]) — by the time an update reaches the core it is
//! fully typed.

use crate::snapshot::SensorSnapshot;

/// One delivery from the external push-update stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceUpdate {
    /// A complete set of sensor readings.
    Snapshot(SensorSnapshot),

    /// The source responded but the dataset is empty or missing.
    /// Surfaced as a transient notice; no alert evaluation is performed.
    EmptyDataset,

    /// Transport-level failure reported by the source.  Surfaced as a
    /// transient notice; no state is mutated and nothing is retried.
    TransportError(String),

    /// The source will deliver no further updates.
    Closed,
}
