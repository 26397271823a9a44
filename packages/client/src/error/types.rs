use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A Result alias where the Err case is [`TimeSeriesError`].
pub type Result<T> = std::result::Result<T, TimeSeriesError>;

/// Terminal failure of a time-series operation.
///
/// A streamed sequence yields at most one of these, after which it is
/// exhausted. Points emitted before the failure stay valid.
#[derive(Debug, thiserror::Error)]
pub enum TimeSeriesError {
    /// The caller lacks permission to read the series.
    #[error("permission denied: {0}")]
    PermissionDenied(ApiError),

    /// The request was not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(ApiError),

    /// The response body could not be decoded into points.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The response body did not have the `{"data":[...]}` shape.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Any other failure, including opaque transport faults.
    #[error("unknown error: {0}")]
    Unknown(#[source] BoxError),
}

/// Classified decode faults.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid UTF-8 sequence at byte {offset}")]
    InvalidUtf8 { offset: u64 },

    #[error("response ended inside a multi-byte UTF-8 sequence")]
    TruncatedUtf8,

    #[error("malformed point object: {0}")]
    MalformedObject(#[source] serde_json::Error),

    #[error("invalid ISO-8601 timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("response ended inside an unterminated object")]
    TruncatedObject,

    #[error("object exceeds the {limit} byte buffer limit")]
    ObjectTooLarge { limit: usize },
}

/// Violations of the fixed array wrapper around the points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    #[error("expected response to start with {expected:?}, found {found:?}")]
    UnexpectedPrefix { expected: String, found: String },

    #[error("response ended before the array prefix was complete")]
    MissingPrefix,

    #[error("response ended without closing the array, trailing text {trailing:?}")]
    UnterminatedArray { trailing: String },
}

/// Failures reported by the chunk source.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The server answered with a structured API error.
    #[error("{0}")]
    Api(ApiError),

    /// Network failure, reader closed unexpectedly, or anything else opaque.
    #[error("transport failure: {0}")]
    Other(#[source] BoxError),
}

impl TransportError {
    /// Wrap an arbitrary error as an opaque transport failure
    pub fn other<E: Into<BoxError>>(error: E) -> Self {
        Self::Other(error.into())
    }
}

impl From<std::io::Error> for TransportError {
    fn from(error: std::io::Error) -> Self {
        Self::Other(Box::new(error))
    }
}

/// Error envelope returned by the platform REST API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(default)]
    pub error_code: String,
    pub error_name: String,
    #[serde(default)]
    pub error_instance_id: Option<String>,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub parameters: HashMap<String, serde_json::Value>,
}

impl ApiError {
    #[must_use]
    pub fn new(error_code: impl Into<String>, error_name: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_name: error_name.into(),
            error_instance_id: None,
            status_code: None,
            parameters: HashMap::new(),
        }
    }

    #[must_use = "Error builder methods return a new ApiError and should be used"]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    #[must_use = "Error builder methods return a new ApiError and should be used"]
    pub fn with_instance_id(mut self, id: impl Into<String>) -> Self {
        self.error_instance_id = Some(id.into());
        self
    }

    /// HTTP status of the failed call, if the envelope carried one
    #[must_use]
    pub fn status(&self) -> Option<http::StatusCode> {
        self.status_code
            .and_then(|code| http::StatusCode::from_u16(code).ok())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error_name, self.error_code)?;
        if let Some(status) = self.status_code {
            write!(f, " status {status}")?;
        }
        if let Some(ref id) = self.error_instance_id {
            write!(f, " instance {id}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
