//! Fluent time-series API
//!
//! `TimeSeriesProperty` → `points()` → range selector → `all()` / `iterate()`.

pub mod property;
pub mod query;
pub mod request;
pub mod terminal;

pub use property::TimeSeriesProperty;
pub use query::{QueryError, TimeSeriesQuery};
pub use request::{RelativeTime, RelativeUnit, RelativeWhen, StreamPointsRequest, TimeRange};
pub use terminal::{PointResults, TimeSeriesPoints};
