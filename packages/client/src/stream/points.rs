use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::stream::FusedStream;
use futures::{Stream, StreamExt};

use super::elements::ArrayElementStream;
use super::reader::ChunkReader;
use crate::config::DecoderConfig;
use crate::error::TimeSeriesError;
use crate::telemetry::StreamStats;
use crate::timeseries::{PointValue, RawPoint, TimeSeriesPoint};

/// Stream of typed points decoded from a streamed points response
///
/// Elements are read as [`RawPoint`]s and their `time` field parsed into a
/// [`Timestamp`](crate::timeseries::Timestamp). A malformed timestamp ends the
/// stream the same way a malformed element does.
pub struct PointStream<R: ChunkReader, V> {
    elements: ArrayElementStream<R, RawPoint<V>>,
}

impl<R: ChunkReader, V: PointValue> PointStream<R, V> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, &DecoderConfig::default())
    }

    pub fn with_config(reader: R, config: &DecoderConfig) -> Self {
        Self {
            elements: ArrayElementStream::with_config(reader, config),
        }
    }

    /// Shared handle to this stream's counters
    #[must_use]
    pub fn stats(&self) -> StreamStats {
        self.elements.stats()
    }
}

impl<R: ChunkReader, V: PointValue> Stream for PointStream<R, V> {
    type Item = Result<TimeSeriesPoint<V>, TimeSeriesError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        let item = match ready!(this.elements.poll_next_unpin(cx)) {
            Some(Ok(raw)) => match raw.into_point() {
                Ok(point) => Ok(point),
                Err(e) => {
                    tracing::warn!(
                        target: "pointstream::stream::points",
                        error = %e,
                        "Point stream terminated by timestamp fault"
                    );
                    this.elements.abort();
                    Err(e.into())
                }
            },
            Some(Err(e)) => Err(e),
            None => return Poll::Ready(None),
        };

        Poll::Ready(Some(item))
    }
}

impl<R: ChunkReader, V: PointValue> FusedStream for PointStream<R, V> {
    fn is_terminated(&self) -> bool {
        self.elements.is_terminated()
    }
}
