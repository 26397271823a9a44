//! Synchronous decode pipeline for one streamed response
//!
//! `feed` chunks in, pull objects out with `next_object` until it returns
//! `None`, and only then feed the next chunk. `finish` validates the tail once
//! the transport reports end of stream.

use bytes::Bytes;

use super::buffer::StreamBuffer;
use super::extractor::ObjectExtractor;
use super::prefix::{ArrayPrefix, PrefixState};
use super::utf8::Utf8Decoder;
use crate::config::DecoderConfig;
use crate::error::{DecodeError, ProtocolError, TimeSeriesError};

/// Trailing text shown in protocol errors
const TRAILING_PREVIEW: usize = 64;

/// Per-response decode state
///
/// Created for one stream consumption and discarded with it.
#[derive(Debug)]
pub struct ArrayDecoder {
    utf8: Utf8Decoder,
    prefix: ArrayPrefix,
    extractor: ObjectExtractor,
    buffer: StreamBuffer,
    max_buffer_size: usize,
}

impl ArrayDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&DecoderConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &DecoderConfig) -> Self {
        Self {
            utf8: Utf8Decoder::new(),
            prefix: ArrayPrefix::new(config.array_prefix.clone()),
            extractor: ObjectExtractor::new(config.brace_scan),
            buffer: StreamBuffer::with_capacity(config.initial_buffer_capacity),
            max_buffer_size: config.max_buffer_size,
        }
    }

    /// Decode one chunk into the buffer and strip the prefix if it is complete
    ///
    /// # Errors
    ///
    /// Returns a decode fault for invalid UTF-8 or a protocol fault if the
    /// response does not open with the array prefix.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<(), TimeSeriesError> {
        self.utf8.decode_into(chunk, &mut self.buffer)?;

        if !self.prefix.is_consumed() {
            self.prefix.strip(&mut self.buffer)?;
        }

        Ok(())
    }

    /// Next complete object in the buffer, if any
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ObjectTooLarge`] when no object can complete
    /// and the buffer has outgrown the configured limit.
    pub fn next_object(&mut self) -> Result<Option<Bytes>, TimeSeriesError> {
        if !self.prefix.is_consumed() {
            return Ok(None);
        }

        if let Some(object) = self.extractor.next_object(&mut self.buffer) {
            return Ok(Some(object));
        }

        if self.buffer.len() > self.max_buffer_size {
            return Err(DecodeError::ObjectTooLarge {
                limit: self.max_buffer_size,
            }
            .into());
        }

        Ok(None)
    }

    /// Validate the state left when the input ends
    ///
    /// Call after `next_object` has returned `None`.
    ///
    /// # Errors
    ///
    /// Returns the first of: a truncated UTF-8 sequence, a missing prefix, an
    /// unterminated object, or text other than `]}` after the last element.
    pub fn finish(&mut self) -> Result<(), TimeSeriesError> {
        self.utf8.finish()?;
        self.prefix.finish()?;
        self.extractor.finish()?;
        check_array_tail(self.buffer.as_bytes())?;
        Ok(())
    }

    /// Progress of the prefix check
    #[must_use]
    pub fn prefix_state(&self) -> PrefixState {
        if self.prefix.is_consumed() {
            PrefixState::Consumed
        } else {
            PrefixState::Pending
        }
    }

    /// Bytes of decoded text waiting in the buffer
    #[inline]
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.extractor.depth()
    }
}

impl Default for ArrayDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Accept separators, then `]`, then `}`, with whitespace anywhere between
fn check_array_tail(rest: &[u8]) -> Result<(), ProtocolError> {
    let mut expected: &[u8] = b"]}";

    for &byte in rest {
        match byte {
            b' ' | b'\t' | b'\r' | b'\n' => {}
            b',' if expected.len() == 2 => {}
            _ if expected.first() == Some(&byte) => expected = &expected[1..],
            _ => return Err(unterminated(rest)),
        }
    }

    if expected.is_empty() {
        Ok(())
    } else {
        Err(unterminated(rest))
    }
}

fn unterminated(rest: &[u8]) -> ProtocolError {
    let shown = rest.len().min(TRAILING_PREVIEW);
    ProtocolError::UnterminatedArray {
        trailing: String::from_utf8_lossy(&rest[..shown]).into_owned(),
    }
}
