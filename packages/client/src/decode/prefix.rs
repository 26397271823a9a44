//! One-shot removal of the literal that opens the element list

use super::buffer::StreamBuffer;
use crate::error::ProtocolError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Progress of the prefix check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixState {
    /// The buffer is a strict prefix of the literal; more text is needed.
    Pending,
    /// The literal has been removed. Never reverts to `Pending`.
    Consumed,
}

/// Strips `{"data":[` (or the configured literal) from the front of the buffer
#[derive(Debug)]
pub struct ArrayPrefix {
    literal: String,
    consumed: bool,
    bom_checked: bool,
}

impl ArrayPrefix {
    #[must_use]
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
            consumed: false,
            bom_checked: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    #[must_use]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Match the buffer against the literal and remove it once complete
    ///
    /// A leading byte order mark is dropped before matching.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnexpectedPrefix`] as soon as the buffered
    /// text can no longer turn into the literal.
    pub fn strip(&mut self, buffer: &mut StreamBuffer) -> Result<PrefixState, ProtocolError> {
        if self.consumed {
            return Ok(PrefixState::Consumed);
        }

        // The buffer only ever holds whole characters, so a BOM is either
        // entirely present or absent once anything has been decoded
        if !self.bom_checked && !buffer.is_empty() {
            if buffer.as_bytes().starts_with(UTF8_BOM) {
                buffer.consume(UTF8_BOM.len());
            }
            self.bom_checked = true;
        }

        let data = buffer.as_bytes();
        let literal = self.literal.as_bytes();

        if data.len() < literal.len() {
            return if literal.starts_with(data) {
                Ok(PrefixState::Pending)
            } else {
                Err(self.mismatch(data))
            };
        }

        if !data.starts_with(literal) {
            return Err(self.mismatch(data));
        }

        buffer.consume(literal.len());
        self.consumed = true;

        tracing::debug!(
            target: "pointstream::decode::prefix",
            prefix = %self.literal,
            "Array prefix consumed"
        );

        Ok(PrefixState::Consumed)
    }

    /// Check the prefix was seen before the input ended
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MissingPrefix`] otherwise.
    pub fn finish(&self) -> Result<(), ProtocolError> {
        if self.consumed {
            Ok(())
        } else {
            Err(ProtocolError::MissingPrefix)
        }
    }

    fn mismatch(&self, data: &[u8]) -> ProtocolError {
        let shown = data.len().min(self.literal.len());
        ProtocolError::UnexpectedPrefix {
            expected: self.literal.clone(),
            found: String::from_utf8_lossy(&data[..shown]).into_owned(),
        }
    }
}
