//! Platform adapters — the outer ring of the hexagonal layout.
//!
//! Each adapter implements one of the port traits in
//! [`crate::app::ports`] (or feeds the update channel), keeping all
//! I/O outside the domain core.

pub mod clock;
pub mod line_source;
pub mod log_sink;
pub mod notification;
