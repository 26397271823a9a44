//! # Pointstream
//!
//! Time-series properties with streaming-first point retrieval.
//!
//! Every read comes back as a `Result`: eagerly with
//! [`TimeSeriesPoints::all`], or one point at a time with
//! [`TimeSeriesPoints::iterate`], which yields decoded points as soon as each
//! element of the streamed response is complete and ends with at most one
//! error.
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use pointstream::{SeriesLocator, TimeSeries};
//!
//! let temperature = TimeSeries::property::<_, f64>(
//!     provider,
//!     SeriesLocator::new("Sensor", "sensor-7", "temperature"),
//! );
//!
//! let last_week = temperature.points().from_weeks_ago(1).all().await?;
//!
//! let mut points = temperature.points().all_time().iterate();
//! while let Some(point) = points.next().await {
//!     let point = point?;
//!     println!("{} {}", point.time, point.value);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

use std::sync::Arc;

pub mod builder;
pub mod provider;

pub use builder::*;
pub use provider::{SeriesLocator, TimeSeriesProvider};

pub use pointstream_client::config::{BraceScan, ConfigurationError, DecoderConfig};
pub use pointstream_client::error::{
    ApiError, DecodeError, ProtocolError, TimeSeriesError, TransportError,
};
pub use pointstream_client::stream::{BlobReader, ChunkReader, StreamReader};
pub use pointstream_client::timeseries::{PointValue, ScalarValue, TimeSeriesPoint, Timestamp};

/// Entry point for time-series property handles
pub struct TimeSeries;

impl TimeSeries {
    /// Handle on the property at `locator`, read through `provider`
    pub fn property<P, V>(provider: P, locator: SeriesLocator) -> TimeSeriesProperty<P, V>
    where
        P: TimeSeriesProvider,
        V: PointValue,
    {
        TimeSeriesProperty::new(Arc::new(provider), locator)
    }
}
