//! Terminal operations: eager `all()` and lazy `iterate()`
//!
//! Both run the same pipeline. `iterate()` is the primitive; `all()` drains
//! it and stops at the first error.

use std::marker::PhantomData;
use std::sync::Arc;

use futures::stream::{self, BoxStream};
use futures::{StreamExt, TryStreamExt};
use pointstream_client::config::DecoderConfig;
use pointstream_client::error::TimeSeriesError;
use pointstream_client::stream::{PointStream, ResultStream, wrap_stream};
use pointstream_client::timeseries::{PointValue, TimeSeriesPoint};

use super::request::StreamPointsRequest;
use crate::provider::{SeriesLocator, TimeSeriesProvider};

/// Incremental point sequence returned by [`TimeSeriesPoints::iterate`]
pub type PointResults<V> =
    ResultStream<BoxStream<'static, Result<TimeSeriesPoint<V>, TimeSeriesError>>>;

/// A fully described points request, ready to run
pub struct TimeSeriesPoints<P, V> {
    provider: Arc<P>,
    locator: SeriesLocator,
    request: StreamPointsRequest,
    config: DecoderConfig,
    _value: PhantomData<fn() -> V>,
}

impl<P: TimeSeriesProvider, V: PointValue> TimeSeriesPoints<P, V> {
    pub(crate) fn new(
        provider: Arc<P>,
        locator: SeriesLocator,
        request: StreamPointsRequest,
        config: DecoderConfig,
    ) -> Self {
        Self {
            provider,
            locator,
            request,
            config,
            _value: PhantomData,
        }
    }

    /// Body that will be sent to the points endpoint
    #[must_use]
    pub fn request(&self) -> &StreamPointsRequest {
        &self.request
    }

    #[must_use]
    pub fn locator(&self) -> &SeriesLocator {
        &self.locator
    }

    /// Read every point into memory
    ///
    /// # Errors
    ///
    /// Returns the first error of the sequence; points decoded before it are
    /// discarded.
    pub async fn all(&self) -> Result<Vec<TimeSeriesPoint<V>>, TimeSeriesError> {
        let points: Vec<TimeSeriesPoint<V>> = self.iterate().try_collect().await?;

        tracing::debug!(
            target: "pointstream::builder::terminal",
            series = %self.locator,
            points = points.len(),
            "Collected all points"
        );

        Ok(points)
    }

    /// Stream points one at a time
    ///
    /// Nothing is requested until the first poll. Every call opens a fresh
    /// request with its own decoder, so two iterations never share state.
    /// The sequence yields points followed by at most one error.
    #[must_use]
    pub fn iterate(&self) -> PointResults<V> {
        let provider = Arc::clone(&self.provider);
        let locator = self.locator.clone();
        let request = self.request.clone();
        let config = self.config.clone();

        let points = stream::once(async move {
            tracing::debug!(
                target: "pointstream::builder::terminal",
                series = %locator,
                ranged = request.range.is_some(),
                "Opening points stream"
            );
            let reader = provider.stream_points(&locator, &request).await?;
            Ok::<_, TimeSeriesError>(PointStream::<P::Reader, V>::with_config(reader, &config))
        })
        .try_flatten();

        wrap_stream(points.boxed())
    }
}
