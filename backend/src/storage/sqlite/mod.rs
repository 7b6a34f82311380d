//! SQLite implementation of the storage traits, built on SQLx.

pub mod child_repository;
pub mod completion_repository;
pub mod connection;
pub mod task_repository;

pub use child_repository::ChildRepository;
pub use completion_repository::CompletionRepository;
pub use connection::DbConnection;
pub use task_repository::TaskRepository;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};

/// Timestamps are stored as fixed-width RFC 3339 text in UTC so that
/// ordering by the column is chronological.
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid stored timestamp: {}", value))?;
    Ok(parsed.with_timezone(&Utc))
}
