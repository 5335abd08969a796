//! Application core — pure domain logic, zero I/O.
//!
//! Business rules for the monitor: edge-triggered alert evaluation and
//! bounded history recording, orchestrated by
//! [`service::AlertService`].  All interaction with the platform
//! happens through the port traits in [`ports`], keeping this layer
//! fully testable with mock adapters.

pub mod events;
pub mod ports;
pub mod service;
pub mod update;
