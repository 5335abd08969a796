//! Line-delimited source adapter.
//!
//! Stands in for the remote real-time stream: each line on the reader
//! is one JSON payload.  Decode failures are forwarded as transport
//! errors rather than terminating the stream, matching how the source
//! surfaces its own transport failures.  EOF maps to
//! [`SourceUpdate::Closed`] so the consumer loop can terminate.

use std::io::BufRead;

use futures_lite::future::block_on;
use log::debug;

use crate::app::update::SourceUpdate;
use crate::channels::UPDATE_CHANNEL;
use crate::ingest;

/// Read payloads from `reader` until EOF, feeding the update channel.
///
/// Blocks when the channel is full, so a slow consumer back-pressures
/// the producer instead of dropping updates.
pub fn run(reader: impl BufRead) {
    for line in reader.lines() {
        let update = match line {
            Ok(payload) if payload.trim().is_empty() => continue,
            Ok(payload) => match ingest::decode_update(&payload) {
                Ok(update) => update,
                Err(e) => SourceUpdate::TransportError(e.to_string()),
            },
            Err(e) => SourceUpdate::TransportError(e.to_string()),
        };
        block_on(UPDATE_CHANNEL.send(update));
    }
    debug!("source reader reached EOF");
    block_on(UPDATE_CHANNEL.send(SourceUpdate::Closed));
}
