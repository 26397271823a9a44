//! Decoder Configuration Module
//!
//! Buffer sizing and scanning behaviour for the streamed points decoder.

use super::validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};

/// Literal that precedes the element list in every points response.
pub const DATA_ARRAY_PREFIX: &str = "{\"data\":[";

/// How the object extractor treats braces inside string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BraceScan {
    /// Quotes and backslash escapes are tracked, so braces inside string
    /// values never affect object boundaries.
    #[default]
    StringAware,
    /// Every `{` and `}` byte counts toward depth. A string value containing
    /// a literal brace desynchronizes object boundaries.
    Lexical,
}

/// Runtime decoder configuration
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    pub initial_buffer_capacity: usize,
    /// Largest amount of undelivered text the decoder will hold.
    pub max_buffer_size: usize,
    pub array_prefix: String,
    pub brace_scan: BraceScan,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            initial_buffer_capacity: 8192,  // 8KB
            max_buffer_size: 16_777_216,    // 16MB
            array_prefix: DATA_ARRAY_PREFIX.to_string(),
            brace_scan: BraceScan::StringAware,
        }
    }
}

impl DecoderConfig {
    /// Create memory-constrained decoder configuration
    #[must_use]
    pub fn low_memory() -> Self {
        Self {
            initial_buffer_capacity: 1024,  // 1KB
            max_buffer_size: 262_144,       // 256KB
            ..Self::default()
        }
    }

    /// Configuration that scans braces without string awareness, for
    /// byte-for-byte agreement with older clients of the points endpoint.
    #[must_use]
    pub fn bug_compatible() -> Self {
        Self {
            brace_scan: BraceScan::Lexical,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_brace_scan(mut self, brace_scan: BraceScan) -> Self {
        self.brace_scan = brace_scan;
        self
    }

    #[must_use]
    pub fn with_max_buffer_size(mut self, max_buffer_size: usize) -> Self {
        self.max_buffer_size = max_buffer_size;
        self
    }
}

impl Validator for DecoderConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::non_zero(self.initial_buffer_capacity, "initial_buffer_capacity")?;
        ConfigValidator::non_zero(self.max_buffer_size, "max_buffer_size")?;

        if self.max_buffer_size < self.initial_buffer_capacity {
            return Err(ConfigurationError::LimitBelowInitial {
                max: self.max_buffer_size,
                initial: self.initial_buffer_capacity,
            });
        }

        // Scanning starts right after the prefix, inside the element array
        if !self.array_prefix.ends_with('[') {
            return Err(ConfigurationError::InvalidPrefix {
                prefix: self.array_prefix.clone(),
            });
        }

        Ok(())
    }
}
