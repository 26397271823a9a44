//! Async delivery of decoded elements and points
//!
//! [`ArrayElementStream`] drives the synchronous decoder from a
//! [`ChunkReader`]; [`PointStream`] adds timestamp mapping; [`ResultStream`]
//! is the boundary adapter that guarantees a single terminal error.

pub mod elements;
pub mod points;
pub mod reader;
pub mod result;

pub use self::{
    elements::ArrayElementStream,
    points::PointStream,
    reader::{BlobReader, ChunkReader, ReaderLease, StreamReader},
    result::{ResultStream, wrap_result, wrap_stream},
};
