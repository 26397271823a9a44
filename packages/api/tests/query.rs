//! Range Query Tests
//!
//! Request bodies produced by the range selectors.

use std::sync::Arc;

use pointstream::{
    DecoderConfig, QueryError, RelativeTime, RelativeUnit, StreamPointsRequest, TimeRange,
    TimeSeries, TimeSeriesProperty, Timestamp,
};
use serde_json::json;

mod common;

use common::{BODY, MockProvider, locator};

#[cfg(test)]
mod query_tests {
    use super::*;

    fn property() -> TimeSeriesProperty<MockProvider, f64> {
        TimeSeries::property(MockProvider::with_body(BODY, 32), locator())
    }

    #[test]
    fn test_relative_ranges() {
        let cases = [
            (property().points().from_years_ago(5), "YEARS", 5),
            (property().points().from_months_ago(2), "MONTHS", 2),
            (property().points().from_weeks_ago(3), "WEEKS", 3),
            (property().points().from_days_ago(1), "DAYS", 1),
            (property().points().from_hours_ago(12), "HOURS", 12),
            (property().points().from_minutes_ago(30), "MINUTES", 30),
            (property().points().from_seconds_ago(45), "SECONDS", 45),
            (property().points().from_milliseconds_ago(500), "MILLISECONDS", 500),
        ];

        for (points, unit, value) in cases {
            assert_eq!(
                serde_json::to_value(points.request()).unwrap(),
                json!({
                    "range": {
                        "type": "relative",
                        "startTime": { "when": "BEFORE", "value": value, "unit": unit }
                    }
                })
            );
        }
    }

    #[test]
    fn test_absolute_range() {
        let start: Timestamp = "2024-01-01T00:00:00Z".parse().unwrap();
        let end: Timestamp = "2024-01-02T12:30:00+01:00".parse().unwrap();

        let points = property().points().range(Some(start), Some(end)).unwrap();
        assert_eq!(
            serde_json::to_value(points.request()).unwrap(),
            json!({
                "range": {
                    "type": "absolute",
                    "startTime": "2024-01-01T00:00:00.000Z",
                    "endTime": "2024-01-02T11:30:00.000Z"
                }
            })
        );

        let open_ended = property().points().range(Some(start), None).unwrap();
        assert_eq!(
            serde_json::to_value(open_ended.request()).unwrap(),
            json!({ "range": { "type": "absolute", "startTime": "2024-01-01T00:00:00.000Z" } })
        );
    }

    #[test]
    fn test_empty_range_rejected() {
        let result = property().points().range(None, None);
        assert!(matches!(result, Err(QueryError::EmptyRange)));
    }

    #[test]
    fn test_all_time_sends_no_range() {
        let points = property().points().all_time();
        assert_eq!(points.request(), &StreamPointsRequest::default());
        assert_eq!(serde_json::to_value(points.request()).unwrap(), json!({}));
    }

    #[test]
    fn test_request_round_trips_wire_shape() {
        let wire = json!({
            "range": {
                "type": "relative",
                "startTime": { "when": "BEFORE", "value": 7, "unit": "DAYS" },
                "endTime": { "when": "AFTER", "value": 1, "unit": "HOURS" }
            }
        });
        let request: StreamPointsRequest = serde_json::from_value(wire).unwrap();

        match request.range {
            Some(TimeRange::Relative { start_time: Some(start), end_time: Some(end) }) => {
                assert_eq!(start.unit, RelativeUnit::Days);
                assert_eq!(start.value, 7);
                assert_eq!(end.unit, RelativeUnit::Hours);
            }
            other => panic!("unexpected range: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_request_reaches_provider() {
        let provider = Arc::new(MockProvider::with_body(BODY, 32));
        let property = TimeSeriesProperty::<_, f64>::new(Arc::clone(&provider), locator());

        property.points().from_weeks_ago(2).all().await.unwrap();
        property.points().all_time().all().await.unwrap();

        let requests = provider.requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 2);
        assert_eq!(
            requests[0].range,
            Some(TimeRange::Relative {
                start_time: Some(RelativeTime::before(2, RelativeUnit::Weeks)),
                end_time: None,
            })
        );
        assert_eq!(requests[1], StreamPointsRequest::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DecoderConfig::default().with_max_buffer_size(16);
        assert!(property().with_config(config).is_err());
        assert!(property().with_config(DecoderConfig::bug_compatible()).is_ok());
    }
}
