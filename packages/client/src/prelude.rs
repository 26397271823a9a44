//! Pointstream client prelude
//!
//! The types needed to decode a streamed points response.

pub use crate::config::{BraceScan, DecoderConfig};
pub use crate::error::{ApiError, DecodeError, ProtocolError, TimeSeriesError, TransportError};
pub use crate::stream::{
    ArrayElementStream, BlobReader, ChunkReader, PointStream, ResultStream, StreamReader,
    wrap_result, wrap_stream,
};
pub use crate::telemetry::{StreamStats, StreamStatsSnapshot};
pub use crate::timeseries::{PointValue, ScalarValue, TimeSeriesPoint, Timestamp};
