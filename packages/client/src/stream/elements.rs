use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use futures::stream::FusedStream;
use serde::de::DeserializeOwned;

use super::reader::{ChunkReader, ReaderLease};
use crate::config::DecoderConfig;
use crate::decode::ArrayDecoder;
use crate::error::{DecodeError, TimeSeriesError};
use crate::telemetry::StreamStats;

/// Pull-based stream of the elements of a `{"data":[...]}` response
///
/// Each element is deserialized into `T` as soon as its closing brace has
/// been received. The transport is asked for another chunk only when the
/// buffer holds no further complete element, and the reader is released
/// exactly once: at end of stream, on the first fault, or on drop.
///
/// The stream yields zero or more `Ok` items followed by at most one `Err`,
/// after which it is terminated.
pub struct ArrayElementStream<R: ChunkReader, T> {
    lease: ReaderLease<R>,
    decoder: ArrayDecoder,
    stats: StreamStats,
    done: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<R: ChunkReader, T: DeserializeOwned> ArrayElementStream<R, T> {
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, &DecoderConfig::default())
    }

    pub fn with_config(reader: R, config: &DecoderConfig) -> Self {
        let stats = StreamStats::new();
        tracing::debug!(
            target: "pointstream::stream::elements",
            brace_scan = ?config.brace_scan,
            initial_capacity = config.initial_buffer_capacity,
            "Opening element stream"
        );
        Self {
            lease: ReaderLease::new(reader, stats.clone()),
            decoder: ArrayDecoder::with_config(config),
            stats,
            done: false,
            _marker: PhantomData,
        }
    }

    /// Shared handle to this stream's counters
    #[must_use]
    pub fn stats(&self) -> StreamStats {
        self.stats.clone()
    }

    /// Terminate the stream after a fault detected downstream
    pub(crate) fn abort(&mut self) {
        if !self.done {
            self.done = true;
            self.stats.record_fault();
        }
        self.lease.release();
    }

    fn fail(&mut self, error: TimeSeriesError) -> TimeSeriesError {
        tracing::warn!(
            target: "pointstream::stream::elements",
            error = %error,
            buffered = self.decoder.buffered(),
            depth = self.decoder.depth(),
            "Element stream terminated by fault"
        );
        self.abort();
        error
    }

    fn decode_element(&mut self) -> Result<Option<T>, TimeSeriesError> {
        let Some(object) = self.decoder.next_object()? else {
            return Ok(None);
        };
        let element = serde_json::from_slice::<T>(&object).map_err(DecodeError::from)?;
        self.stats.record_object();
        Ok(Some(element))
    }
}

impl<R: ChunkReader, T: DeserializeOwned> Stream for ArrayElementStream<R, T> {
    type Item = Result<T, TimeSeriesError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.done {
            return Poll::Ready(None);
        }

        loop {
            match this.decode_element() {
                Ok(Some(element)) => return Poll::Ready(Some(Ok(element))),
                Ok(None) => {}
                Err(e) => return Poll::Ready(Some(Err(this.fail(e)))),
            }

            match ready!(this.lease.poll_chunk(cx)) {
                Some(Ok(chunk)) => {
                    this.stats.record_chunk(chunk.len());
                    tracing::trace!(
                        target: "pointstream::stream::elements",
                        bytes = chunk.len(),
                        buffered = this.decoder.buffered(),
                        "Chunk received"
                    );
                    if let Err(e) = this.decoder.feed(&chunk) {
                        return Poll::Ready(Some(Err(this.fail(e))));
                    }
                }
                Some(Err(e)) => return Poll::Ready(Some(Err(this.fail(e.into())))),
                None => {
                    this.lease.release();
                    if let Err(e) = this.decoder.finish() {
                        return Poll::Ready(Some(Err(this.fail(e))));
                    }
                    this.done = true;
                    tracing::debug!(
                        target: "pointstream::stream::elements",
                        objects = this.stats.snapshot().objects_emitted,
                        "Element stream complete"
                    );
                    return Poll::Ready(None);
                }
            }
        }
    }
}

impl<R: ChunkReader, T: DeserializeOwned> FusedStream for ArrayElementStream<R, T> {
    fn is_terminated(&self) -> bool {
        self.done
    }
}
