//! Time-series point types
//!
//! The wire shape of one element is `{"time": "<ISO-8601>", "value": <number|string>}`.
//! [`RawPoint`] is that shape as deserialized; [`TimeSeriesPoint`] is the
//! domain-typed point after the timestamp has been parsed.

mod point;
mod timestamp;
mod value;

pub use point::{RawPoint, TimeSeriesPoint};
pub use timestamp::Timestamp;
pub use value::{PointValue, ScalarValue};
