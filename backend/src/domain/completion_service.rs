use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use tracing::info;

use super::errors::TrackerError;
use super::models::{Child, Completion, LearningTask};
use crate::storage::CompletionStorage;

/// Service over the append-only completion log
#[derive(Clone)]
pub struct CompletionService {
    storage: Arc<dyn CompletionStorage>,
}

impl CompletionService {
    pub fn new(storage: Arc<dyn CompletionStorage>) -> Self {
        Self { storage }
    }

    /// Append a completion of `task` by `child`, stamped with the current time.
    ///
    /// Every call creates a new, distinct completion: completing the same task
    /// again is how children earn the reward again.
    pub async fn record_completion(
        &self,
        child: &Child,
        task: &LearningTask,
        notes: Option<String>,
    ) -> Result<Completion, TrackerError> {
        info!("Recording completion of task {} by child {}", task.id, child.id);

        let completion = Completion {
            id: shared::Completion::generate_id(),
            child_id: child.id.clone(),
            task_id: task.id.clone(),
            completed_at: Utc::now().trunc_subsecs(6),
            notes: notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
        };

        self.storage.store_completion(&completion).await?;

        info!("Recorded completion {}", completion.id);
        Ok(completion)
    }

    /// The completion log of one child, oldest first
    pub async fn list_completions(&self, child_id: &str) -> Result<Vec<Completion>, TrackerError> {
        info!("Listing completions for child {}", child_id);

        let completions = self.storage.list_completions(child_id).await?;

        info!("Found {} completions for child {}", completions.len(), child_id);
        Ok(completions)
    }
}
