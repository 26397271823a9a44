pub mod classification;
pub mod types;

pub use classification::{PERMISSION_DENIED, UNAUTHORIZED};
pub use types::{ApiError, DecodeError, ProtocolError, Result, TimeSeriesError, TransportError};
