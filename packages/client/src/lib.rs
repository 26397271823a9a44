//! # Pointstream Client
//!
//! Incremental decoder for streamed time-series responses.
//!
//! The points endpoint answers with `{"data":[{"time":..,"value":..}, ...]}`
//! delivered as an arbitrary sequence of byte chunks. This crate turns that
//! chunk sequence into typed points as soon as each element is complete,
//! independent of where the chunk boundaries fall: inside a multi-byte
//! character, inside an object, or across several chunks at once.
//!
//! ## Features
//!
//! - **Chunk-split invariant decoding** of UTF-8 text and object boundaries
//! - **Pull-based streaming**: the transport is polled only when no complete
//!   element is buffered
//! - **Single terminal error**: zero or more points, then at most one `Err`
//! - **Scoped reader release** on completion, fault or early drop
//!
//! ## Usage
//!
//! ```rust
//! use futures::{StreamExt, executor::block_on};
//! use pointstream_client::prelude::*;
//!
//! let body = r#"{"data":[{"time":"2024-01-01T00:00:00Z","value":1.5}]}"#;
//! let mut points = PointStream::<_, f64>::new(BlobReader::new(body));
//!
//! let point = block_on(points.next()).unwrap().unwrap();
//! assert_eq!(point.value, 1.5);
//! assert!(block_on(points.next()).is_none());
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod decode;
pub mod error;
pub mod stream;
pub mod telemetry;
pub mod timeseries;

pub mod prelude;

pub use crate::error::{Result, TimeSeriesError};
