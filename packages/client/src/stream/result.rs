//! Result wrapping at the module boundary
//!
//! Producers report failure through their own error type. [`ResultStream`]
//! classifies the first failure into a [`TimeSeriesError`], yields it once and
//! drops the producer, so no value can ever follow an `Err`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use futures::Stream;
use futures::stream::FusedStream;
use pin_project_lite::pin_project;

use crate::error::TimeSeriesError;

pin_project! {
    /// Fallible producer adapted to `Ok* Err?` delivery
    #[must_use = "streams do nothing unless polled"]
    pub struct ResultStream<S> {
        #[pin]
        producer: Option<S>,
    }
}

impl<S> ResultStream<S> {
    pub fn new(producer: S) -> Self {
        Self {
            producer: Some(producer),
        }
    }
}

impl<S, V, E> Stream for ResultStream<S>
where
    S: Stream<Item = Result<V, E>>,
    E: Into<TimeSeriesError>,
{
    type Item = Result<V, TimeSeriesError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        let Some(producer) = this.producer.as_mut().as_pin_mut() else {
            return Poll::Ready(None);
        };

        match ready!(producer.poll_next(cx)) {
            Some(Ok(value)) => Poll::Ready(Some(Ok(value))),
            Some(Err(error)) => {
                this.producer.set(None);
                Poll::Ready(Some(Err(error.into())))
            }
            None => {
                this.producer.set(None);
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.producer {
            Some(producer) => (0, producer.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<S, V, E> FusedStream for ResultStream<S>
where
    S: Stream<Item = Result<V, E>>,
    E: Into<TimeSeriesError>,
{
    fn is_terminated(&self) -> bool {
        self.producer.is_none()
    }
}

/// Wrap a fallible producer stream
pub fn wrap_stream<S, V, E>(producer: S) -> ResultStream<S>
where
    S: Stream<Item = Result<V, E>>,
    E: Into<TimeSeriesError>,
{
    ResultStream::new(producer)
}

/// Run a single-shot operation and classify its failure
///
/// # Errors
///
/// Returns the producer's error converted into a [`TimeSeriesError`].
pub async fn wrap_result<F, V, E>(operation: F) -> Result<V, TimeSeriesError>
where
    F: Future<Output = Result<V, E>>,
    E: Into<TimeSeriesError>,
{
    operation.await.map_err(Into::into)
}
