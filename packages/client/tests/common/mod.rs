//! Shared fixtures for the decoder integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::task::{Context, Poll};

use bytes::Bytes;
use pointstream_client::error::TransportError;
use pointstream_client::stream::ChunkReader;

/// Split `body` at the given byte offsets
pub fn split_at(body: &[u8], offsets: &[usize]) -> Vec<Bytes> {
    let mut chunks = Vec::with_capacity(offsets.len() + 1);
    let mut start = 0;
    for &offset in offsets {
        chunks.push(Bytes::copy_from_slice(&body[start..offset]));
        start = offset;
    }
    chunks.push(Bytes::copy_from_slice(&body[start..]));
    chunks
}

/// One chunk per byte
pub fn bytewise(body: &[u8]) -> Vec<Bytes> {
    body.iter().map(|b| Bytes::copy_from_slice(&[*b])).collect()
}

/// Counters observed by a [`ScriptedReader`]
#[derive(Debug, Clone, Default)]
pub struct ReaderProbe {
    pub polls: Arc<AtomicUsize>,
    pub releases: Arc<AtomicUsize>,
}

impl ReaderProbe {
    pub fn polls(&self) -> usize {
        self.polls.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

/// Reader that plays back a fixed script of chunks and failures
pub struct ScriptedReader {
    script: VecDeque<Result<Bytes, TransportError>>,
    probe: ReaderProbe,
}

impl ScriptedReader {
    pub fn new(script: Vec<Result<Bytes, TransportError>>) -> (Self, ReaderProbe) {
        let probe = ReaderProbe::default();
        let reader = Self {
            script: script.into(),
            probe: probe.clone(),
        };
        (reader, probe)
    }

    pub fn chunks(chunks: Vec<Bytes>) -> (Self, ReaderProbe) {
        Self::new(chunks.into_iter().map(Ok).collect())
    }
}

impl ChunkReader for ScriptedReader {
    fn poll_chunk(&mut self, _cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, TransportError>>> {
        self.probe.polls.fetch_add(1, Ordering::SeqCst);
        Poll::Ready(self.script.pop_front())
    }

    fn release(&mut self) {
        self.probe.releases.fetch_add(1, Ordering::SeqCst);
    }
}
