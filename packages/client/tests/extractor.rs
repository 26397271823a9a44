//! Balanced-Object Extractor Tests
//!
//! The extractor is driven directly over a `StreamBuffer`, without any
//! transport or async runtime.

use pointstream_client::config::BraceScan;
use pointstream_client::decode::{ObjectExtractor, StreamBuffer};
use pointstream_client::error::DecodeError;

fn drain(extractor: &mut ObjectExtractor, buffer: &mut StreamBuffer) -> Vec<String> {
    std::iter::from_fn(|| extractor.next_object(buffer))
        .map(|object| String::from_utf8(object.to_vec()).expect("extracted text is UTF-8"))
        .collect()
}

#[cfg(test)]
mod extractor_tests {
    use super::*;

    #[test]
    fn test_nested_objects_split_at_top_level() {
        let mut extractor = ObjectExtractor::default();
        let mut buffer = StreamBuffer::new();
        buffer.append(br#"{"d":{"id":1}},{"d":{"id":2}}]}"#);

        let objects = drain(&mut extractor, &mut buffer);

        assert_eq!(objects, vec![r#"{"d":{"id":1}}"#, r#"{"d":{"id":2}}"#]);
        assert_eq!(buffer.as_bytes(), b"]}");
        assert_eq!(extractor.depth(), 0);
    }

    #[test]
    fn test_object_split_across_many_appends() {
        let mut extractor = ObjectExtractor::default();
        let mut buffer = StreamBuffer::new();

        for piece in [&b"{\"ti"[..], b"me\":\"2024-01-01T00:", b"00:00Z\",\"val", b"ue\":{\"x\":1}"] {
            buffer.append(piece);
            assert!(extractor.next_object(&mut buffer).is_none());
            assert!(extractor.in_object());
        }

        buffer.append(b"}");
        let object = extractor.next_object(&mut buffer).unwrap();
        assert_eq!(
            &object[..],
            br#"{"time":"2024-01-01T00:00:00Z","value":{"x":1}}"#
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_emission_follows_completion_order() {
        let mut extractor = ObjectExtractor::default();
        let mut buffer = StreamBuffer::new();
        buffer.append(br#"{"n":1},{"n":2},{"n":3},{"n":"#);

        let objects = drain(&mut extractor, &mut buffer);
        assert_eq!(objects, vec![r#"{"n":1}"#, r#"{"n":2}"#, r#"{"n":3}"#]);

        buffer.append(b"4}");
        assert_eq!(drain(&mut extractor, &mut buffer), vec![r#"{"n":4}"#]);
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let mut extractor = ObjectExtractor::new(BraceScan::StringAware);
        let mut buffer = StreamBuffer::new();
        buffer.append(br#"{"v":"}"},{"v":"{{"},{"v":"a\"}b"}"#);

        let objects = drain(&mut extractor, &mut buffer);

        assert_eq!(
            objects,
            vec![r#"{"v":"}"}"#, r#"{"v":"{{"}"#, r#"{"v":"a\"}b"}"#]
        );
    }

    #[test]
    fn test_escape_split_across_appends() {
        let mut extractor = ObjectExtractor::new(BraceScan::StringAware);
        let mut buffer = StreamBuffer::new();

        buffer.append(br#"{"v":"a\"#);
        assert!(extractor.next_object(&mut buffer).is_none());
        buffer.append(br#""}"}"#);

        assert_eq!(drain(&mut extractor, &mut buffer), vec![r#"{"v":"a\"}"}"#]);
    }

    #[test]
    fn test_lexical_scan_counts_braces_in_strings() {
        let mut extractor = ObjectExtractor::new(BraceScan::Lexical);
        let mut buffer = StreamBuffer::new();
        buffer.append(br#"{"v":"}"},{"v":"x"}"#);

        let first = extractor.next_object(&mut buffer).unwrap();

        // The brace inside the string closes the object early
        assert_eq!(&first[..], br#"{"v":"}"#);
    }

    #[test]
    fn test_wrapper_brace_at_depth_zero() {
        let mut extractor = ObjectExtractor::default();
        let mut buffer = StreamBuffer::new();
        buffer.append(b"]}");

        assert!(extractor.next_object(&mut buffer).is_none());
        assert_eq!(extractor.depth(), 0);
        extractor.finish().unwrap();
    }

    #[test]
    fn test_finish_inside_object() {
        let mut extractor = ObjectExtractor::default();
        let mut buffer = StreamBuffer::new();
        buffer.append(br#"{"time":"2024"#);

        assert!(extractor.next_object(&mut buffer).is_none());
        assert!(matches!(extractor.finish(), Err(DecodeError::TruncatedObject)));
    }
}
