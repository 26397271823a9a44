//! Wire body of the streamed points endpoint

use pointstream_client::timeseries::Timestamp;
use serde::{Deserialize, Serialize};

/// Body of a streamed points request; no range means the whole series
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamPointsRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<TimeRange>,
}

impl StreamPointsRequest {
    #[must_use]
    pub fn with_range(range: TimeRange) -> Self {
        Self { range: Some(range) }
    }
}

/// Time window of a points request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimeRange {
    #[serde(rename_all = "camelCase")]
    Absolute {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_time: Option<Timestamp>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end_time: Option<Timestamp>,
    },
    #[serde(rename_all = "camelCase")]
    Relative {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_time: Option<RelativeTime>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end_time: Option<RelativeTime>,
    },
}

/// Offset from the time the server handles the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelativeTime {
    pub when: RelativeWhen,
    pub value: u64,
    pub unit: RelativeUnit,
}

impl RelativeTime {
    #[must_use]
    pub fn before(value: u64, unit: RelativeUnit) -> Self {
        Self {
            when: RelativeWhen::Before,
            value,
            unit,
        }
    }

    #[must_use]
    pub fn after(value: u64, unit: RelativeUnit) -> Self {
        Self {
            when: RelativeWhen::After,
            value,
            unit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelativeWhen {
    Before,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelativeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}
