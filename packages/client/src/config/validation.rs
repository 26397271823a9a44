//! Validation of decoder settings

/// Result of validating a configuration
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Inconsistent or unusable decoder settings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{field} must be greater than zero")]
    ZeroBufferSize { field: &'static str },

    #[error("max_buffer_size ({max}) is smaller than initial_buffer_capacity ({initial})")]
    LimitBelowInitial { max: usize, initial: usize },

    #[error("array prefix {prefix:?} does not open an array")]
    InvalidPrefix { prefix: String },
}

/// Implemented by every configuration struct that can be checked up front
pub trait Validator {
    /// # Errors
    ///
    /// Returns the first [`ConfigurationError`] found.
    fn validate(&self) -> ConfigResult<()>;
}

/// Shared field checks
pub struct ConfigValidator;

impl ConfigValidator {
    /// # Errors
    ///
    /// Returns [`ConfigurationError::ZeroBufferSize`] for a zero size.
    pub fn non_zero(size: usize, field: &'static str) -> ConfigResult<()> {
        if size == 0 {
            Err(ConfigurationError::ZeroBufferSize { field })
        } else {
            Ok(())
        }
    }
}
