//! Decoder configuration
//!
//! Plain runtime configuration with named presets and validation.

pub mod decoder;
pub mod validation;

pub use decoder::{BraceScan, DATA_ARRAY_PREFIX, DecoderConfig};
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
