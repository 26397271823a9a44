//! Incremental decoding of streamed `{"data":[...]}` responses
//!
//! The response body arrives as arbitrary byte chunks. This module turns them
//! into the text of each array element as soon as the element is complete:
//!
//! - `utf8`: chunk bytes to text, holding back characters split across chunks
//! - `prefix`: one-shot removal of the `{"data":[` literal
//! - `extractor`: brace-depth scan emitting each balanced top-level object
//! - `pipeline`: the three stages above over one shared text buffer
//!
//! Everything here is synchronous. The async layer in [`crate::stream`] feeds
//! chunks in only after [`ArrayDecoder::next_object`] has run dry, so the
//! buffer holds little more than the span between two element boundaries.
//!
//! # Examples
//!
//! ```rust
//! use pointstream_client::decode::ArrayDecoder;
//!
//! let mut decoder = ArrayDecoder::new();
//! decoder.feed(br#"{"data":[{"a":1},{"#).unwrap();
//! assert_eq!(&decoder.next_object().unwrap().unwrap()[..], br#"{"a":1}"#);
//! assert!(decoder.next_object().unwrap().is_none());
//!
//! decoder.feed(br#""a":2}]}"#).unwrap();
//! assert_eq!(&decoder.next_object().unwrap().unwrap()[..], br#"{"a":2}"#);
//! assert!(decoder.next_object().unwrap().is_none());
//! decoder.finish().unwrap();
//! ```

pub mod buffer;
pub mod extractor;
pub mod pipeline;
pub mod prefix;
pub mod utf8;

pub use self::{
    buffer::StreamBuffer,
    extractor::ObjectExtractor,
    pipeline::ArrayDecoder,
    prefix::{ArrayPrefix, PrefixState},
    utf8::Utf8Decoder,
};
