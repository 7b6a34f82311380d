//! Conversions between domain models and the DTOs in the `shared` crate.

pub mod board_mapper;
pub mod child_mapper;
pub mod completion_mapper;
pub mod task_mapper;

pub use board_mapper::BoardMapper;
pub use child_mapper::ChildMapper;
pub use completion_mapper::CompletionMapper;
pub use task_mapper::TaskMapper;

use chrono::{DateTime, SecondsFormat, Utc};

/// RFC 3339 in UTC with microseconds and a `Z` suffix, matching storage
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}
