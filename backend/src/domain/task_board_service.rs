//! Composes the child, task and completion services into task boards.
//!
//! This is the layer that honors the progress engine's caller contract: the
//! completion log it hands to a board is always fetched for the board's
//! child, and a completion only reaches local state once storage has
//! confirmed it.

use tracing::{error, info};

use super::child_service::ChildService;
use super::commands::completion::{CompleteTaskCommand, CompletedTask};
use super::completion_service::CompletionService;
use super::errors::TrackerError;
use super::progress_engine::{self, AreaProgress};
use super::task_board::TaskBoard;
use super::task_service::TaskService;

#[derive(Clone)]
pub struct TaskBoardService {
    child_service: ChildService,
    task_service: TaskService,
    completion_service: CompletionService,
}

impl TaskBoardService {
    pub fn new(
        child_service: ChildService,
        task_service: TaskService,
        completion_service: CompletionService,
    ) -> Self {
        Self {
            child_service,
            task_service,
            completion_service,
        }
    }

    /// Load a fresh board for the child
    pub async fn load_board(&self, child_id: &str) -> Result<TaskBoard, TrackerError> {
        info!("Loading task board for child {}", child_id);

        let child = self.child_service.require_child(child_id).await?;
        let tasks = self.task_service.list_tasks_for_age(child.age).await?;
        let completions = self.completion_service.list_completions(&child.id).await?;

        Ok(TaskBoard::new(child, &tasks, completions))
    }

    /// Per-area progress for the child
    pub async fn progress(&self, child_id: &str) -> Result<Vec<AreaProgress>, TrackerError> {
        Ok(self.load_board(child_id).await?.progress())
    }

    /// Record a completion and report the reward and the new completion count
    pub async fn complete_task(&self, command: CompleteTaskCommand) -> Result<CompletedTask, TrackerError> {
        info!("Completing task {} for child {}", command.task_id, command.child_id);

        let child = self.child_service.require_child(&command.child_id).await?;
        let task = self.task_service.require_task(&command.task_id).await?;

        // Counted before the write: nothing fallible may follow a stored completion
        let log = self.completion_service.list_completions(&child.id).await?;
        let completion_count = progress_engine::completion_count(&log, &task.id) + 1;

        let completion = self
            .completion_service
            .record_completion(&child, &task, command.notes)
            .await
            .map_err(|e| {
                error!("Failed to record completion of {} by {}: {}", task.id, child.id, e);
                e
            })?;

        info!(
            "Child {} has completed task {} {} time(s)",
            child.id, task.id, completion_count
        );

        Ok(CompletedTask {
            completion,
            reward_message: task.reward_message,
            completion_count,
        })
    }

    /// Complete a task and merge the confirmed result into a board the caller
    /// is holding. On failure the board is left exactly as it was.
    pub async fn complete_on_board(
        &self,
        board: &mut TaskBoard,
        task_id: &str,
        notes: Option<String>,
    ) -> Result<CompletedTask, TrackerError> {
        let completed = self
            .complete_task(CompleteTaskCommand {
                child_id: board.child().id.clone(),
                task_id: task_id.to_string(),
                notes,
            })
            .await?;

        board.apply_completion(
            completed.completion.clone(),
            completed.reward_message.clone(),
            completed.completion.completed_at,
        );

        Ok(completed)
    }
}
