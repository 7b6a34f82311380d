//! Task catalog: age-filtered reads and validated ingestion.
//!
//! The catalog is reference data. It is populated by importing task
//! definitions; every definition in a batch is validated before anything is
//! stored, so one bad definition rejects the whole batch.

use chrono::{SubsecRound, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use super::commands::task::NewTaskCommand;
use super::errors::TrackerError;
use super::icons::TaskIcon;
use super::models::{Child, LearningTask};
use crate::storage::TaskStorage;

/// Catalog imported into an empty store on first start
const STARTER_CATALOG: &str = include_str!("../../data/starter_catalog.json");

/// Service for reading and populating the task catalog
#[derive(Clone)]
pub struct TaskService {
    storage: Arc<dyn TaskStorage>,
}

impl TaskService {
    pub fn new(storage: Arc<dyn TaskStorage>) -> Self {
        Self { storage }
    }

    /// Tasks whose age range contains `age`, ordered by title
    pub async fn list_tasks_for_age(&self, age: u8) -> Result<Vec<LearningTask>, TrackerError> {
        info!("Listing tasks for age {}", age);

        let tasks = self.storage.list_tasks_for_age(age).await?;

        info!("Found {} tasks for age {}", tasks.len(), age);
        Ok(tasks)
    }

    pub async fn get_task(&self, task_id: &str) -> Result<Option<LearningTask>, TrackerError> {
        let task = self.storage.get_task(task_id).await?;
        if task.is_none() {
            warn!("Task not found: {}", task_id);
        }
        Ok(task)
    }

    /// Get a task by ID, treating absence as an error
    pub async fn require_task(&self, task_id: &str) -> Result<LearningTask, TrackerError> {
        self.get_task(task_id)
            .await?
            .ok_or_else(|| TrackerError::TaskNotFound(task_id.to_string()))
    }

    /// Validate and store a batch of task definitions
    pub async fn import_tasks(&self, commands: Vec<NewTaskCommand>) -> Result<Vec<LearningTask>, TrackerError> {
        info!("Importing {} task definitions", commands.len());

        let now = Utc::now().trunc_subsecs(6);
        let tasks = commands
            .into_iter()
            .map(|command| Self::build_task(command, now))
            .collect::<Result<Vec<_>, _>>()?;

        self.storage.store_tasks(&tasks).await?;

        info!("Imported {} tasks", tasks.len());
        Ok(tasks)
    }

    /// Import the bundled starter catalog when the store holds no tasks.
    /// Returns the number of tasks imported.
    pub async fn seed_starter_catalog(&self) -> Result<usize, TrackerError> {
        let existing = self.storage.count_tasks().await?;
        if existing > 0 {
            info!("Task catalog already holds {} tasks, skipping seed", existing);
            return Ok(0);
        }

        let definitions: Vec<shared::NewLearningTask> = serde_json::from_str(STARTER_CATALOG)
            .map_err(|e| TrackerError::Persistence(anyhow::Error::new(e).context("Invalid starter catalog")))?;

        let imported = self
            .import_tasks(definitions.into_iter().map(NewTaskCommand::from).collect())
            .await?;

        info!("Seeded task catalog with {} starter tasks", imported.len());
        Ok(imported.len())
    }

    /// Validate one definition and turn it into a catalog task
    fn build_task(command: NewTaskCommand, now: chrono::DateTime<Utc>) -> Result<LearningTask, TrackerError> {
        let title = command.title.trim().to_string();
        if title.is_empty() {
            return Err(TrackerError::EmptyTaskTitle);
        }

        if command.min_age > command.max_age {
            return Err(TrackerError::InvalidAgeRange {
                title,
                min_age: command.min_age,
                max_age: command.max_age,
            });
        }
        let min_age = Child::validate_age(command.min_age)?;
        let max_age = Child::validate_age(command.max_age)?;

        let time_estimate = match u32::try_from(command.time_estimate) {
            Ok(minutes) if minutes > 0 => minutes,
            _ => {
                return Err(TrackerError::NonPositiveTimeEstimate {
                    title,
                    minutes: command.time_estimate,
                })
            }
        };

        let icon = command
            .icon
            .map(|icon| icon.trim().to_string())
            .filter(|icon| !icon.is_empty())
            .unwrap_or_else(|| TaskIcon::default().name().to_string());

        Ok(LearningTask {
            id: shared::LearningTask::generate_id(),
            title,
            description: command.description.trim().to_string(),
            min_age,
            max_age,
            time_estimate,
            development_area: command.development_area,
            reward_message: command.reward_message.trim().to_string(),
            icon,
            created_at: now,
        })
    }
}
