//! Telemetry for streamed decoding
//!
//! Lock-free counters shared between a running stream and any handle the
//! caller cloned before consuming it.

pub mod stream;

pub use stream::{StreamStats, StreamStatsSnapshot};
