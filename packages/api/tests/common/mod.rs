//! In-memory provider for facade tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use bytes::Bytes;
use pointstream::{
    ApiError, ChunkReader, SeriesLocator, StreamPointsRequest, TimeSeriesProvider, TransportError,
};

#[derive(Debug, Default)]
pub struct Counters {
    pub opens: AtomicUsize,
    pub releases: AtomicUsize,
}

impl Counters {
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

/// Chunk reader that counts its release
pub struct CountingReader {
    chunks: VecDeque<Result<Bytes, TransportError>>,
    counters: Arc<Counters>,
}

impl ChunkReader for CountingReader {
    fn poll_chunk(&mut self, _cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, TransportError>>> {
        Poll::Ready(self.chunks.pop_front())
    }

    fn release(&mut self) {
        self.counters.releases.fetch_add(1, Ordering::SeqCst);
    }
}

/// Serves a fixed points body in fixed-size chunks
pub struct MockProvider {
    pub body: Vec<u8>,
    pub chunk_size: usize,
    pub open_error: Option<ApiError>,
    pub first: Bytes,
    pub last: Bytes,
    pub counters: Arc<Counters>,
    pub requests: Mutex<Vec<StreamPointsRequest>>,
}

impl MockProvider {
    pub fn with_body(body: &str, chunk_size: usize) -> Self {
        env_logger::try_init().ok();

        Self {
            body: body.as_bytes().to_vec(),
            chunk_size,
            open_error: None,
            first: Bytes::new(),
            last: Bytes::new(),
            counters: Arc::new(Counters::default()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ApiError) -> Self {
        Self {
            open_error: Some(error),
            ..Self::with_body("", 1)
        }
    }
}

impl TimeSeriesProvider for MockProvider {
    type Reader = CountingReader;

    async fn stream_points(
        &self,
        _locator: &SeriesLocator,
        request: &StreamPointsRequest,
    ) -> Result<CountingReader, TransportError> {
        self.counters.opens.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request.clone());

        if let Some(error) = &self.open_error {
            return Err(TransportError::Api(error.clone()));
        }

        let chunks = self
            .body
            .chunks(self.chunk_size)
            .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
            .collect();

        Ok(CountingReader {
            chunks,
            counters: Arc::clone(&self.counters),
        })
    }

    async fn first_point(&self, _locator: &SeriesLocator) -> Result<Bytes, TransportError> {
        Ok(self.first.clone())
    }

    async fn last_point(&self, _locator: &SeriesLocator) -> Result<Bytes, TransportError> {
        if self.last.is_empty() {
            return Err(TransportError::other("last point endpoint unavailable"));
        }
        Ok(self.last.clone())
    }
}

pub fn locator() -> SeriesLocator {
    SeriesLocator::new("Sensor", "sensor-7", "temperature")
}

pub const BODY: &str = r#"{"data":[{"time":"2024-02-01T00:00:00Z","value":20.5},{"time":"2024-02-01T00:01:00Z","value":21.0},{"time":"2024-02-01T00:02:00Z","value":21.25}]}"#;
