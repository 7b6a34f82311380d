//! # Storage Traits
//!
//! Storage abstraction used by the domain services. Any backend implementing
//! these traits can stand in for SQLite, which is how the services are tested
//! against failing storage.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::{Child, Completion, LearningTask};

/// Child profile storage
#[async_trait]
pub trait ChildStorage: Send + Sync {
    /// Store a newly registered child
    async fn store_child(&self, child: &Child) -> Result<()>;

    /// Retrieve a specific child by ID
    async fn get_child(&self, child_id: &str) -> Result<Option<Child>>;

    /// List all children, newest first
    async fn list_children(&self) -> Result<Vec<Child>>;
}

/// Task catalog storage
#[async_trait]
pub trait TaskStorage: Send + Sync {
    /// Store a batch of tasks. Either every task is stored or none is.
    async fn store_tasks(&self, tasks: &[LearningTask]) -> Result<()>;

    /// Retrieve a specific task by ID
    async fn get_task(&self, task_id: &str) -> Result<Option<LearningTask>>;

    /// Tasks where `min_age <= age <= max_age`, ordered by title
    async fn list_tasks_for_age(&self, age: u8) -> Result<Vec<LearningTask>>;

    /// Number of tasks in the catalog
    async fn count_tasks(&self) -> Result<u64>;
}

/// Completion log storage. Append-only.
#[async_trait]
pub trait CompletionStorage: Send + Sync {
    /// Append a completion
    async fn store_completion(&self, completion: &Completion) -> Result<()>;

    /// Completions of one child, oldest first
    async fn list_completions(&self, child_id: &str) -> Result<Vec<Completion>>;
}
