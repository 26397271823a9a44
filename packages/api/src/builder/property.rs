//! Time-series property handle

use std::sync::Arc;

use pointstream_client::config::{ConfigResult, DecoderConfig, Validator};
use pointstream_client::error::{DecodeError, TimeSeriesError};
use pointstream_client::stream::wrap_result;
use pointstream_client::timeseries::{PointValue, TimeSeriesPoint};

use super::query::TimeSeriesQuery;
use crate::provider::{SeriesLocator, TimeSeriesProvider};

/// One time-series property of one object, with values of type `V`
pub struct TimeSeriesProperty<P, V> {
    provider: Arc<P>,
    locator: SeriesLocator,
    config: DecoderConfig,
    _value: std::marker::PhantomData<fn() -> V>,
}

impl<P: TimeSeriesProvider, V: PointValue> TimeSeriesProperty<P, V> {
    pub fn new(provider: Arc<P>, locator: SeriesLocator) -> Self {
        Self {
            provider,
            locator,
            config: DecoderConfig::default(),
            _value: std::marker::PhantomData,
        }
    }

    /// Use `config` for every stream opened through this property
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is inconsistent.
    pub fn with_config(mut self, config: DecoderConfig) -> ConfigResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    #[must_use]
    pub fn locator(&self) -> &SeriesLocator {
        &self.locator
    }

    /// Earliest point of the series
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure, or a decode error if the
    /// body is not a single point.
    pub async fn first_point(&self) -> Result<TimeSeriesPoint<V>, TimeSeriesError> {
        wrap_result(async {
            let body = self.provider.first_point(&self.locator).await?;
            decode_single_point(&body)
        })
        .await
    }

    /// Latest point of the series
    ///
    /// # Errors
    ///
    /// Returns the classified transport failure, or a decode error if the
    /// body is not a single point.
    pub async fn last_point(&self) -> Result<TimeSeriesPoint<V>, TimeSeriesError> {
        wrap_result(async {
            let body = self.provider.last_point(&self.locator).await?;
            decode_single_point(&body)
        })
        .await
    }

    /// Start a points request
    #[must_use]
    pub fn points(&self) -> TimeSeriesQuery<P, V> {
        TimeSeriesQuery::new(Arc::clone(&self.provider), self.locator.clone(), self.config.clone())
    }
}

impl<P, V> Clone for TimeSeriesProperty<P, V> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            locator: self.locator.clone(),
            config: self.config.clone(),
            _value: std::marker::PhantomData,
        }
    }
}

fn decode_single_point<V: PointValue>(body: &[u8]) -> Result<TimeSeriesPoint<V>, TimeSeriesError> {
    let text = std::str::from_utf8(body).map_err(|e| DecodeError::InvalidUtf8 {
        offset: e.valid_up_to() as u64,
    })?;
    Ok(TimeSeriesPoint::from_json(text)?)
}
