//! Array Prefix Tests

use pointstream_client::decode::{ArrayPrefix, PrefixState, StreamBuffer};
use pointstream_client::error::ProtocolError;

fn buffer_with(text: &[u8]) -> StreamBuffer {
    let mut buffer = StreamBuffer::new();
    buffer.append(text);
    buffer
}

#[cfg(test)]
mod prefix_tests {
    use super::*;

    #[test]
    fn test_strict_prefix_waits_for_more_text() {
        let mut prefix = ArrayPrefix::new("{\"data\":[");
        let mut buffer = buffer_with(b"{\"da");

        assert_eq!(prefix.strip(&mut buffer).unwrap(), PrefixState::Pending);
        assert_eq!(buffer.as_bytes(), b"{\"da");

        buffer.append(b"ta\":[{\"a\":1}");
        assert_eq!(prefix.strip(&mut buffer).unwrap(), PrefixState::Consumed);
        assert_eq!(buffer.as_bytes(), b"{\"a\":1}");
        assert!(prefix.is_consumed());
    }

    #[test]
    fn test_consumed_never_reverts() {
        let mut prefix = ArrayPrefix::new("{\"data\":[");
        let mut buffer = buffer_with(b"{\"data\":[");
        prefix.strip(&mut buffer).unwrap();

        // Text that would be a mismatch is left alone once consumed
        buffer.append(b"{\"data\":[");
        assert_eq!(prefix.strip(&mut buffer).unwrap(), PrefixState::Consumed);
        assert_eq!(buffer.as_bytes(), b"{\"data\":[");
    }

    #[test]
    fn test_mismatch_is_protocol_error() {
        let mut prefix = ArrayPrefix::new("{\"data\":[");
        let mut buffer = buffer_with(b"[{\"time\"");

        let err = prefix.strip(&mut buffer).unwrap_err();
        match err {
            ProtocolError::UnexpectedPrefix { expected, found } => {
                assert_eq!(expected, "{\"data\":[");
                assert_eq!(found, "[{\"time\"");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_early_mismatch_detected_before_full_length() {
        let mut prefix = ArrayPrefix::new("{\"data\":[");
        let mut buffer = buffer_with(b"{\"e");

        assert!(matches!(
            prefix.strip(&mut buffer),
            Err(ProtocolError::UnexpectedPrefix { .. })
        ));
    }

    #[test]
    fn test_leading_bom_dropped() {
        let mut prefix = ArrayPrefix::new("{\"data\":[");
        let mut buffer = buffer_with(b"\xEF\xBB\xBF{\"data\":[]}");

        assert_eq!(prefix.strip(&mut buffer).unwrap(), PrefixState::Consumed);
        assert_eq!(buffer.as_bytes(), b"]}");
    }

    #[test]
    fn test_finish_before_prefix() {
        let prefix = ArrayPrefix::new("{\"data\":[");
        assert_eq!(prefix.finish(), Err(ProtocolError::MissingPrefix));
    }
}
