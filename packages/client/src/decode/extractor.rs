//! Balanced-object extraction
//!
//! Scans buffered text for `{...}` spans that open and close at depth zero.
//! Each completed span is split off the front of the buffer together with
//! everything before it, and scanning resumes on what remains. An object is
//! never emitted before its closing brace has been buffered.
//!
//! The scan state survives between calls, so text appended by the next chunk
//! is scanned once rather than from the start of the pending object.
//!
//! The extractor does not track the array's closing `]`. An object that
//! arrives after `]}` is still emitted; the pipeline only rejects that tail
//! in `ArrayDecoder::finish`, once the input has ended.

use bytes::Bytes;
use memchr::{memchr2, memchr3};

use super::buffer::StreamBuffer;
use crate::config::BraceScan;
use crate::error::DecodeError;

/// Mutable scan state of the extractor
#[derive(Debug, Clone)]
pub struct ObjectExtractor {
    /// Brace nesting depth at `pos`
    depth: usize,
    /// Offset of the `{` that opened the pending top-level object
    start: usize,
    /// Next buffer offset to scan
    pos: usize,
    /// Inside a string literal of the pending object
    in_string: bool,
    /// The previous byte was a backslash inside a string literal
    escaped: bool,
    scan: BraceScan,
}

impl ObjectExtractor {
    #[must_use]
    pub fn new(scan: BraceScan) -> Self {
        Self {
            depth: 0,
            start: 0,
            pos: 0,
            in_string: false,
            escaped: false,
            scan,
        }
    }

    /// Split the next complete top-level object off the buffer
    ///
    /// Returns `None` once the buffer holds no further complete object; the
    /// scan position is kept so the next call only looks at new text.
    pub fn next_object(&mut self, buffer: &mut StreamBuffer) -> Option<Bytes> {
        let end = self.scan_to_boundary(buffer.as_bytes())?;
        let object = buffer.take_span(self.start, end);

        self.start = 0;
        self.pos = 0;

        tracing::trace!(
            target: "pointstream::decode::extractor",
            object_len = object.len(),
            buffered = buffer.len(),
            "Object extracted"
        );

        Some(object)
    }

    /// Advance `pos` until a top-level object closes; returns its end offset
    fn scan_to_boundary(&mut self, data: &[u8]) -> Option<usize> {
        while self.pos < data.len() {
            if self.escaped {
                self.escaped = false;
                self.pos += 1;
                continue;
            }

            if self.in_string {
                match memchr2(b'"', b'\\', &data[self.pos..]) {
                    Some(offset) => {
                        let at = self.pos + offset;
                        if data[at] == b'\\' {
                            self.escaped = true;
                        } else {
                            self.in_string = false;
                        }
                        self.pos = at + 1;
                    }
                    None => self.pos = data.len(),
                }
                continue;
            }

            let hit = match self.scan {
                BraceScan::StringAware => memchr3(b'{', b'}', b'"', &data[self.pos..]),
                BraceScan::Lexical => memchr2(b'{', b'}', &data[self.pos..]),
            };
            let Some(offset) = hit else {
                self.pos = data.len();
                break;
            };

            let at = self.pos + offset;
            self.pos = at + 1;

            match data[at] {
                b'{' => {
                    if self.depth == 0 {
                        self.start = at;
                    }
                    self.depth += 1;
                }
                // A closing brace at depth zero belongs to the response
                // wrapper, not to an element
                b'}' if self.depth > 0 => {
                    self.depth -= 1;
                    if self.depth == 0 {
                        return Some(at + 1);
                    }
                }
                b'"' if self.depth > 0 => self.in_string = true,
                _ => {}
            }
        }

        None
    }

    /// Current brace depth
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// True while a top-level object has been opened but not closed
    #[inline]
    #[must_use]
    pub fn in_object(&self) -> bool {
        self.depth > 0
    }

    /// Check the input did not end inside an object
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TruncatedObject`] if an object is still open.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.in_object() {
            Err(DecodeError::TruncatedObject)
        } else {
            Ok(())
        }
    }
}

impl Default for ObjectExtractor {
    fn default() -> Self {
        Self::new(BraceScan::default())
    }
}
