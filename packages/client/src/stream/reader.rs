//! Transport reader seam
//!
//! The HTTP layer hands the decoder a [`ChunkReader`]. The decoder wraps it
//! in a [`ReaderLease`], which releases the reader exactly once on whichever
//! exit path is taken first: end of stream, a fault, or the consumer
//! dropping the stream early.

use std::task::{Context, Poll};

use bytes::Bytes;
use futures::{Stream, StreamExt};

use crate::error::TransportError;
use crate::telemetry::StreamStats;

/// Pull source of response body chunks
pub trait ChunkReader: Unpin {
    /// Poll for the next chunk; `Ready(None)` is the end-of-stream signal.
    fn poll_chunk(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, TransportError>>>;

    /// Give the underlying body back to the transport.
    ///
    /// Called at most once, after which the reader is not polled again.
    fn release(&mut self);
}

/// Adapts any `Stream` of byte chunks into a [`ChunkReader`]
///
/// Releasing drops the wrapped stream.
#[derive(Debug)]
pub struct StreamReader<S> {
    inner: Option<S>,
}

impl<S> StreamReader<S> {
    pub fn new(inner: S) -> Self {
        Self { inner: Some(inner) }
    }
}

impl<S, E> ChunkReader for StreamReader<S>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Into<TransportError>,
{
    fn poll_chunk(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, TransportError>>> {
        match self.inner.as_mut() {
            Some(stream) => stream
                .poll_next_unpin(cx)
                .map(|chunk| chunk.map(|result| result.map_err(Into::into))),
            None => Poll::Ready(None),
        }
    }

    fn release(&mut self) {
        self.inner = None;
    }
}

/// Reader over a body that was delivered whole
#[derive(Debug, Clone)]
pub struct BlobReader {
    body: Option<Bytes>,
}

impl BlobReader {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self {
            body: Some(body.into()),
        }
    }
}

impl ChunkReader for BlobReader {
    fn poll_chunk(&mut self, _cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, TransportError>>> {
        Poll::Ready(self.body.take().map(Ok))
    }

    fn release(&mut self) {
        self.body = None;
    }
}

/// Scoped ownership of a reader with guaranteed single release
#[derive(Debug)]
pub struct ReaderLease<R: ChunkReader> {
    reader: Option<R>,
    stats: StreamStats,
}

impl<R: ChunkReader> ReaderLease<R> {
    pub fn new(reader: R, stats: StreamStats) -> Self {
        Self {
            reader: Some(reader),
            stats,
        }
    }

    /// Poll the leased reader; a released lease reports end of stream
    pub fn poll_chunk(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, TransportError>>> {
        match self.reader.as_mut() {
            Some(reader) => reader.poll_chunk(cx),
            None => Poll::Ready(None),
        }
    }

    /// Release the reader now; later calls and the final drop are no-ops
    pub fn release(&mut self) {
        if let Some(mut reader) = self.reader.take() {
            reader.release();
            self.stats.record_release();
            tracing::debug!(
                target: "pointstream::stream::reader",
                "Transport reader released"
            );
        }
    }

    #[inline]
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.reader.is_none()
    }
}

impl<R: ChunkReader> Drop for ReaderLease<R> {
    fn drop(&mut self) {
        self.release();
    }
}
