//! FireWatch monitor library.
//!
//! Exposes the alert core and its adapters for the `firewatch` binary
//! and for integration testing.  The core modules ([`alert`],
//! [`history`], [`app`]) are pure logic; all I/O lives behind the port
//! traits in [`app::ports`] and the adapters in [`adapters`].

#![deny(unused_must_use)]

pub mod adapters;
pub mod alert;
pub mod app;
pub mod channels;
pub mod config;
pub mod history;
pub mod ingest;
pub mod snapshot;
