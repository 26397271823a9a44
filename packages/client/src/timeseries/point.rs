use serde::{Deserialize, Serialize};

use super::timestamp::Timestamp;
use super::value::PointValue;
use crate::error::DecodeError;

/// One element of a points response, before timestamp parsing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPoint<V> {
    pub time: String,
    pub value: V,
}

/// One time-series sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint<V> {
    pub time: Timestamp,
    pub value: V,
}

impl<V: PointValue> RawPoint<V> {
    /// Parse the `time` field into a [`Timestamp`]
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidTimestamp`] for a malformed `time`.
    pub fn into_point(self) -> Result<TimeSeriesPoint<V>, DecodeError> {
        Ok(TimeSeriesPoint {
            time: Timestamp::from_iso_string(&self.time)?,
            value: self.value,
        })
    }
}

impl<V: PointValue> TimeSeriesPoint<V> {
    /// Decode a single `{"time","value"}` object
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedObject`] if the text is not a point
    /// object of the declared value type, or
    /// [`DecodeError::InvalidTimestamp`] if `time` does not parse.
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        serde_json::from_str::<RawPoint<V>>(text)?.into_point()
    }
}
