//! Result Wrapping Tests

use std::io;

use futures::stream::{self, FusedStream};
use futures::StreamExt;
use pointstream_client::error::{ApiError, ProtocolError, TimeSeriesError, TransportError};
use pointstream_client::stream::{wrap_result, wrap_stream};

#[cfg(test)]
mod result_wrapping_tests {
    use super::*;

    #[tokio::test]
    async fn test_nothing_follows_an_error() {
        let producer = stream::iter(vec![
            Ok(1),
            Ok(2),
            Err(TransportError::Api(ApiError::new("UNAUTHORIZED", "Unauthorized"))),
            Ok(3),
        ]);
        let mut results = wrap_stream(producer);

        assert_eq!(results.next().await.unwrap().unwrap(), 1);
        assert_eq!(results.next().await.unwrap().unwrap(), 2);
        assert!(results.next().await.unwrap().unwrap_err().is_unauthorized());
        assert!(results.is_terminated());
        assert!(results.next().await.is_none());
    }

    #[tokio::test]
    async fn test_normal_end_has_no_marker() {
        let producer = stream::iter(vec![Ok::<_, TimeSeriesError>("a"), Ok("b")]);
        let values: Vec<_> = wrap_stream(producer).collect().await;

        assert_eq!(values.len(), 2);
        assert!(values.iter().all(Result::is_ok));
    }

    #[tokio::test]
    async fn test_single_shot_classification() {
        let ok = wrap_result(async { Ok::<_, TransportError>(5) }).await;
        assert_eq!(ok.unwrap(), 5);

        let opaque = wrap_result(async {
            Err::<u8, _>(TransportError::from(io::Error::other("socket closed")))
        })
        .await
        .unwrap_err();
        assert!(matches!(opaque, TimeSeriesError::Unknown(_)));
        assert!(opaque.api_error().is_none());

        let protocol = wrap_result(async { Err::<u8, _>(ProtocolError::MissingPrefix) })
            .await
            .unwrap_err();
        assert_eq!(protocol.as_protocol(), Some(&ProtocolError::MissingPrefix));
    }

    #[test]
    fn test_unrecognized_api_error_is_unknown() {
        let api = ApiError::new("INVALID_ARGUMENT", "InvalidRangeParameters").with_instance_id("abc-123");
        let err = TimeSeriesError::from(TransportError::Api(api.clone()));

        assert!(matches!(err, TimeSeriesError::Unknown(_)));
        assert_eq!(err.api_error(), Some(&api));
        assert!(!err.is_permission_denied());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_api_error_envelope_deserializes() {
        let body = r#"{"errorCode":"PERMISSION_DENIED","errorName":"PermissionDenied","errorInstanceId":"e-1","parameters":{"objectType":"Sensor"}}"#;
        let api: ApiError = serde_json::from_str(body).unwrap();

        assert_eq!(api.error_instance_id.as_deref(), Some("e-1"));
        assert_eq!(api.parameters["objectType"], "Sensor");
        assert!(TimeSeriesError::from(api).is_permission_denied());
    }
}
