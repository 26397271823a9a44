//! Text buffer for streamed decoding
//!
//! Holds decoded chunk text until the extractor splits completed objects
//! off the front. Objects are handed out as frozen `Bytes` without copying.

mod capacity;
mod core;

pub use self::core::StreamBuffer;

use bytes::Buf;

impl StreamBuffer {
    /// Discard the first `count` bytes; out-of-range counts are ignored
    pub fn consume(&mut self, count: usize) {
        if count > self.buffer.len() {
            return;
        }
        self.buffer.advance(count);
        self.capacity_manager.release_slack(&mut self.buffer);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Bytes allocated, including idle space
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Text not yet split off
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Bytes appended over the buffer's lifetime
    #[inline]
    #[must_use]
    pub fn total_bytes_processed(&self) -> u64 {
        self.total_processed
    }

    /// Grow steps since the buffer last gave memory back
    #[must_use]
    pub fn growth_operations(&self) -> u32 {
        self.capacity_manager.grows_since_shrink
    }
}

impl Default for StreamBuffer {
    fn default() -> Self {
        Self::new()
    }
}
