use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completion of a task by a child. Append-only; the same (child, task)
/// pair may appear any number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub id: String,
    pub child_id: String,
    pub task_id: String,
    pub completed_at: DateTime<Utc>,
    pub notes: Option<String>,
}
