//! # Storage Module
//!
//! Persistence collaborator for the learning tracker: child profiles, the
//! task catalog and the completion log.
//!
//! The domain layer only sees the traits in [`traits`]; the SQLite
//! implementation lives in [`sqlite`]. Referential integrity between
//! completions, children and tasks is enforced here through foreign keys.

pub mod sqlite;
pub mod traits;

pub use sqlite::{ChildRepository, CompletionRepository, DbConnection, TaskRepository};
pub use traits::{ChildStorage, CompletionStorage, TaskStorage};

#[cfg(test)]
pub(crate) mod test_utils;
