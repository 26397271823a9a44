//! Range selection for a points request

use std::marker::PhantomData;
use std::sync::Arc;

use pointstream_client::config::DecoderConfig;
use pointstream_client::timeseries::{PointValue, Timestamp};

use super::request::{RelativeTime, RelativeUnit, StreamPointsRequest, TimeRange};
use super::terminal::TimeSeriesPoints;
use crate::provider::{SeriesLocator, TimeSeriesProvider};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("absolute range needs a start time, an end time, or both")]
    EmptyRange,
}

/// Chooses the window of points to read
///
/// Every selector consumes the query and returns the terminal
/// [`TimeSeriesPoints`], which performs the request.
pub struct TimeSeriesQuery<P, V> {
    provider: Arc<P>,
    locator: SeriesLocator,
    config: DecoderConfig,
    _value: PhantomData<fn() -> V>,
}

impl<P: TimeSeriesProvider, V: PointValue> TimeSeriesQuery<P, V> {
    pub(crate) fn new(provider: Arc<P>, locator: SeriesLocator, config: DecoderConfig) -> Self {
        Self {
            provider,
            locator,
            config,
            _value: PhantomData,
        }
    }

    #[must_use]
    pub fn from_years_ago(self, years: u64) -> TimeSeriesPoints<P, V> {
        self.before_now(years, RelativeUnit::Years)
    }

    #[must_use]
    pub fn from_months_ago(self, months: u64) -> TimeSeriesPoints<P, V> {
        self.before_now(months, RelativeUnit::Months)
    }

    #[must_use]
    pub fn from_weeks_ago(self, weeks: u64) -> TimeSeriesPoints<P, V> {
        self.before_now(weeks, RelativeUnit::Weeks)
    }

    #[must_use]
    pub fn from_days_ago(self, days: u64) -> TimeSeriesPoints<P, V> {
        self.before_now(days, RelativeUnit::Days)
    }

    #[must_use]
    pub fn from_hours_ago(self, hours: u64) -> TimeSeriesPoints<P, V> {
        self.before_now(hours, RelativeUnit::Hours)
    }

    #[must_use]
    pub fn from_minutes_ago(self, minutes: u64) -> TimeSeriesPoints<P, V> {
        self.before_now(minutes, RelativeUnit::Minutes)
    }

    #[must_use]
    pub fn from_seconds_ago(self, seconds: u64) -> TimeSeriesPoints<P, V> {
        self.before_now(seconds, RelativeUnit::Seconds)
    }

    #[must_use]
    pub fn from_milliseconds_ago(self, milliseconds: u64) -> TimeSeriesPoints<P, V> {
        self.before_now(milliseconds, RelativeUnit::Milliseconds)
    }

    /// Absolute window between two instants, either of which may be open
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyRange`] when both bounds are `None`; use
    /// [`all_time`](Self::all_time) to read the whole series.
    pub fn range(
        self,
        start: Option<Timestamp>,
        end: Option<Timestamp>,
    ) -> Result<TimeSeriesPoints<P, V>, QueryError> {
        if start.is_none() && end.is_none() {
            return Err(QueryError::EmptyRange);
        }

        Ok(self.with_request(StreamPointsRequest::with_range(TimeRange::Absolute {
            start_time: start,
            end_time: end,
        })))
    }

    /// The whole series, no range sent
    #[must_use]
    pub fn all_time(self) -> TimeSeriesPoints<P, V> {
        self.with_request(StreamPointsRequest::default())
    }

    fn before_now(self, value: u64, unit: RelativeUnit) -> TimeSeriesPoints<P, V> {
        self.with_request(StreamPointsRequest::with_range(TimeRange::Relative {
            start_time: Some(RelativeTime::before(value, unit)),
            end_time: None,
        }))
    }

    fn with_request(self, request: StreamPointsRequest) -> TimeSeriesPoints<P, V> {
        TimeSeriesPoints::new(self.provider, self.locator, request, self.config)
    }
}
