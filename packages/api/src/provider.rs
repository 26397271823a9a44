//! REST collaborator seam
//!
//! Request construction, authentication and the HTTP transport live behind
//! [`TimeSeriesProvider`]. The facade only needs a chunk reader for the
//! streamed points endpoint and the raw bodies of the first/last point
//! endpoints.

use std::fmt;
use std::future::Future;

use bytes::Bytes;
use pointstream_client::error::TransportError;
use pointstream_client::stream::ChunkReader;

use crate::builder::StreamPointsRequest;

/// Address of one time-series property on one object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeriesLocator {
    pub object_type: String,
    pub primary_key: String,
    pub property: String,
}

impl SeriesLocator {
    pub fn new(
        object_type: impl Into<String>,
        primary_key: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            object_type: object_type.into(),
            primary_key: primary_key.into(),
            property: property.into(),
        }
    }
}

impl fmt::Display for SeriesLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.object_type, self.primary_key, self.property)
    }
}

/// Remote endpoints backing a time-series property
pub trait TimeSeriesProvider: Send + Sync + 'static {
    /// Body reader of the streamed points response
    type Reader: ChunkReader + Send + 'static;

    /// Open the streamed points endpoint for `request`
    ///
    /// The returned reader yields the `{"data":[...]}` body in whatever
    /// chunks the transport delivers.
    fn stream_points(
        &self,
        locator: &SeriesLocator,
        request: &StreamPointsRequest,
    ) -> impl Future<Output = Result<Self::Reader, TransportError>> + Send;

    /// Body of the first-point endpoint: one `{"time","value"}` object
    fn first_point(
        &self,
        locator: &SeriesLocator,
    ) -> impl Future<Output = Result<Bytes, TransportError>> + Send;

    /// Body of the last-point endpoint: one `{"time","value"}` object
    fn last_point(
        &self,
        locator: &SeriesLocator,
    ) -> impl Future<Output = Result<Bytes, TransportError>> + Send;
}
