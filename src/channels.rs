//! Source-to-core update channel.
//!
//! A bounded `embassy-sync` channel bridges the source adapter
//! (producer) with the monitor loop (single consumer).
//!
//! ```text
//! ┌──────────────┐ SourceUpdate ┌──────────────┐
//! │ Source Task  │─────────────▶│ Monitor Loop │
//! │ (producer)   │              │ (consumer)   │
//! └──────────────┘              └──────────────┘
//! ```
//!
//! The consumer processes each update to completion before receiving
//! the next, so the alert-state and history commits never interleave —
//! no locking is needed beyond the channel itself.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use crate::app::update::SourceUpdate;

/// Channel depth for inbound updates.
const UPDATE_DEPTH: usize = 8;

/// Inbound update channel: source adapter → monitor loop.
pub static UPDATE_CHANNEL: Channel<CriticalSectionRawMutex, SourceUpdate, UPDATE_DEPTH> =
    Channel::new();
