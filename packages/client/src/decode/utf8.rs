//! Incremental UTF-8 decoding
//!
//! Chunks arrive with no regard for character boundaries. The decoder
//! appends every complete character to the text buffer and carries the
//! bytes of a character split across chunks until the rest arrives.

use arrayvec::ArrayVec;
use simdutf8::compat::from_utf8;

use super::buffer::StreamBuffer;
use crate::error::DecodeError;

/// Width of the character introduced by `lead`, or 1 for bytes that cannot
/// start a multi-byte sequence.
#[inline]
fn sequence_width(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}

/// Chunk-to-text decoder with carry-over for split characters
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    /// Leading bytes of a character whose remainder is still in flight
    carry: ArrayVec<u8, 4>,
    /// Bytes of input seen so far, for error offsets
    offset: u64,
}

impl Utf8Decoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `chunk` and append the newly complete text to `out`
    ///
    /// Returns the number of text bytes appended. Zero-length chunks are
    /// valid and append nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidUtf8`] for a sequence that can never
    /// become valid, no matter what bytes follow.
    pub fn decode_into(&mut self, chunk: &[u8], out: &mut StreamBuffer) -> Result<usize, DecodeError> {
        let before = out.len();
        let mut rest = chunk;

        if !self.carry.is_empty() {
            let needed = sequence_width(self.carry[0]).saturating_sub(self.carry.len());
            let take = needed.min(rest.len());
            let carried = self.carry.len() as u64;

            let mut candidate = self.carry.clone();
            for &byte in &rest[..take] {
                if candidate.try_push(byte).is_err() {
                    return Err(DecodeError::InvalidUtf8 { offset: self.offset - carried });
                }
            }

            match from_utf8(&candidate) {
                Ok(_) => {
                    out.append(&candidate);
                    self.carry.clear();
                }
                Err(e) if e.error_len().is_none() => {
                    // Still short; only possible when the chunk ran out
                    self.carry = candidate;
                    self.offset += take as u64;
                    return Ok(0);
                }
                Err(_) => {
                    return Err(DecodeError::InvalidUtf8 { offset: self.offset - carried });
                }
            }

            self.offset += take as u64;
            rest = &rest[take..];
        }

        match from_utf8(rest) {
            Ok(_) => out.append(rest),
            Err(e) => {
                let valid = e.valid_up_to();
                out.append(&rest[..valid]);

                if e.error_len().is_some() {
                    return Err(DecodeError::InvalidUtf8 {
                        offset: self.offset + valid as u64,
                    });
                }

                // Incomplete trailing sequence: at most three bytes
                self.carry.clear();
                for &byte in &rest[valid..] {
                    if self.carry.try_push(byte).is_err() {
                        return Err(DecodeError::InvalidUtf8 {
                            offset: self.offset + valid as u64,
                        });
                    }
                }
            }
        }

        self.offset += rest.len() as u64;
        Ok(out.len() - before)
    }

    /// True while bytes of an incomplete character are held back
    #[inline]
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.carry.is_empty()
    }

    /// Total input bytes seen
    #[inline]
    #[must_use]
    pub fn bytes_seen(&self) -> u64 {
        self.offset
    }

    /// Check the input did not end inside a character
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TruncatedUtf8`] if bytes are still carried.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.carry.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::TruncatedUtf8)
        }
    }
}
