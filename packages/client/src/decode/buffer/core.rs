//! Core StreamBuffer implementation
//!
//! Holds decoded, not-yet-delivered response text and hands out completed
//! object spans without copying.

use bytes::{Buf, Bytes, BytesMut};

use super::capacity::CapacityManager;

/// Growing and shrinking buffer of decoded response text
///
/// Every byte in the buffer belongs to a complete UTF-8 character; partial
/// sequences are held back by the UTF-8 decoder until they complete.
#[derive(Debug)]
pub struct StreamBuffer {
    pub(super) buffer: BytesMut,
    pub(super) total_processed: u64,
    pub(super) capacity_manager: CapacityManager,
}

impl StreamBuffer {
    /// Buffer that starts with, and never shrinks below, `capacity` bytes
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            total_processed: 0,
            capacity_manager: CapacityManager::new(capacity),
        }
    }

    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(8192)
    }

    /// Append decoded text to the buffer
    ///
    /// The caller guarantees `text` ends on a character boundary.
    pub fn append(&mut self, text: &[u8]) {
        self.total_processed += text.len() as u64;

        if self.buffer.capacity() - self.buffer.len() < text.len() {
            self.capacity_manager.reserve_for(&mut self.buffer, text.len());
        }

        self.buffer.extend_from_slice(text);
    }

    /// Remove `[0, end)` from the front of the buffer and return `[start, end)`
    ///
    /// Everything before `start` is discarded with the span.
    pub fn take_span(&mut self, start: usize, end: usize) -> Bytes {
        let end = end.min(self.buffer.len());
        let mut head = self.buffer.split_to(end);
        head.advance(start.min(end));
        self.capacity_manager.release_slack(&mut self.buffer);
        head.freeze()
    }

    /// Drop all buffered text
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.capacity_manager.reset();
    }
}
