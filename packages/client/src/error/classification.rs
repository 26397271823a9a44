use super::types::{ApiError, BoxError, DecodeError, ProtocolError, TimeSeriesError, TransportError};

/// `errorName` values the time-series endpoints classify.
pub const PERMISSION_DENIED: &str = "PermissionDenied";
pub const UNAUTHORIZED: &str = "Unauthorized";

impl TimeSeriesError {
    /// Wrap any unrecognized failure as [`TimeSeriesError::Unknown`].
    pub fn unknown<E: Into<BoxError>>(error: E) -> Self {
        Self::Unknown(error.into())
    }

    /// Returns true if the response body could not be decoded.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns true if the response body broke the array wrapper.
    #[must_use]
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }

    /// Returns true if the failure came from the chunk source or the server.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied(_) | Self::Unauthorized(_) | Self::Unknown(_)
        )
    }

    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// The API error envelope, for server-reported failures
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::PermissionDenied(e) | Self::Unauthorized(e) => Some(e),
            Self::Unknown(source) => source.downcast_ref::<ApiError>(),
            _ => None,
        }
    }

    /// The decode fault, if this is one
    #[must_use]
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode(e) => Some(e),
            _ => None,
        }
    }

    /// The protocol fault, if this is one
    #[must_use]
    pub fn as_protocol(&self) -> Option<&ProtocolError> {
        match self {
            Self::Protocol(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ApiError> for TimeSeriesError {
    fn from(error: ApiError) -> Self {
        match error.error_name.as_str() {
            PERMISSION_DENIED => Self::PermissionDenied(error),
            UNAUTHORIZED => Self::Unauthorized(error),
            _ => Self::Unknown(Box::new(error)),
        }
    }
}

impl From<TransportError> for TimeSeriesError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Api(api) => api.into(),
            TransportError::Other(source) => Self::Unknown(source),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedObject(error)
    }
}

impl From<BoxError> for TimeSeriesError {
    fn from(error: BoxError) -> Self {
        match error.downcast::<ApiError>() {
            Ok(api) => (*api).into(),
            Err(other) => Self::Unknown(other),
        }
    }
}
