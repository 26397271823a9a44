use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DecodeError;

/// Date-time layouts tried after RFC 3339 when an offset is present.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M%#z"];

/// Date-time layouts without an offset, read as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Instant of a time-series point, always normalized to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse an ISO-8601 timestamp
    ///
    /// Accepts RFC 3339, date-times without seconds, date-times without an
    /// offset and plain dates. A missing offset is read as UTC and a plain
    /// date as UTC midnight.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidTimestamp`] if none of the ISO-8601
    /// layouts match.
    pub fn from_iso_string(value: &str) -> Result<Self, DecodeError> {
        let source = match DateTime::parse_from_rfc3339(value) {
            Ok(parsed) => return Ok(Self(parsed.with_timezone(&Utc))),
            Err(source) => source,
        };

        let with_offset = OFFSET_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(value, format).ok())
            .map(|parsed| parsed.with_timezone(&Utc));
        let naive = || {
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .or_else(|| {
                    NaiveDate::parse_from_str(value, "%Y-%m-%d")
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                })
                .map(|naive| naive.and_utc())
        };

        with_offset
            .or_else(naive)
            .map(Self)
            .ok_or_else(|| DecodeError::InvalidTimestamp {
                value: value.to_string(),
                source,
            })
    }

    /// Render as RFC 3339 in UTC with millisecond precision
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl FromStr for Timestamp {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso_string(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_iso_string(&raw).map_err(serde::de::Error::custom)
    }
}
