//! Shared test infrastructure: a fully wired backend over in-memory SQLite,
//! and a storage double whose every call fails.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::DevelopmentArea;

use super::{ChildStorage, CompletionStorage, DbConnection, TaskStorage};
use crate::domain::child_service::ChildService;
use crate::domain::commands::child::CreateChildCommand;
use crate::domain::commands::task::NewTaskCommand;
use crate::domain::completion_service::CompletionService;
use crate::domain::models::{Child, Completion, LearningTask};
use crate::domain::task_board_service::TaskBoardService;
use crate::domain::task_service::TaskService;
use crate::AppState;

/// Services wired over a fresh in-memory database
pub struct TestBackend {
    pub child_service: ChildService,
    pub task_service: TaskService,
    pub completion_service: CompletionService,
    pub task_board_service: TaskBoardService,
}

impl TestBackend {
    pub async fn new() -> Self {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");

        let AppState {
            child_service,
            task_service,
            completion_service,
            task_board_service,
        } = AppState::new(db);

        Self {
            child_service,
            task_service,
            completion_service,
            task_board_service,
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            child_service: self.child_service.clone(),
            task_service: self.task_service.clone(),
            completion_service: self.completion_service.clone(),
            task_board_service: self.task_board_service.clone(),
        }
    }

    pub async fn create_child(&self, name: &str, age: i64) -> Child {
        self.child_service
            .create_child(CreateChildCommand {
                name: name.to_string(),
                age,
                avatar_color: None,
            })
            .await
            .expect("Failed to create test child")
    }

    /// Import a single cognitive task
    pub async fn create_task(&self, title: &str, min_age: i64, max_age: i64) -> LearningTask {
        let mut imported = self
            .task_service
            .import_tasks(vec![NewTaskCommand {
                title: title.to_string(),
                description: format!("Try to {}", title.to_lowercase()),
                min_age,
                max_age,
                time_estimate: 10,
                development_area: DevelopmentArea::Cognitive,
                reward_message: format!("Hooray, you did {}!", title),
                icon: Some("Puzzle".to_string()),
            }])
            .await
            .expect("Failed to create test task");
        imported.remove(0)
    }
}

/// Storage that fails every call, for exercising error propagation
pub struct FailingStorage;

fn storage_down<T>() -> Result<T> {
    Err(anyhow!("storage unavailable"))
}

#[async_trait]
impl ChildStorage for FailingStorage {
    async fn store_child(&self, _child: &Child) -> Result<()> {
        storage_down()
    }

    async fn get_child(&self, _child_id: &str) -> Result<Option<Child>> {
        storage_down()
    }

    async fn list_children(&self) -> Result<Vec<Child>> {
        storage_down()
    }
}

#[async_trait]
impl TaskStorage for FailingStorage {
    async fn store_tasks(&self, _tasks: &[LearningTask]) -> Result<()> {
        storage_down()
    }

    async fn get_task(&self, _task_id: &str) -> Result<Option<LearningTask>> {
        storage_down()
    }

    async fn list_tasks_for_age(&self, _age: u8) -> Result<Vec<LearningTask>> {
        storage_down()
    }

    async fn count_tasks(&self) -> Result<u64> {
        storage_down()
    }
}

#[async_trait]
impl CompletionStorage for FailingStorage {
    async fn store_completion(&self, _completion: &Completion) -> Result<()> {
        storage_down()
    }

    async fn list_completions(&self, _child_id: &str) -> Result<Vec<Completion>> {
        storage_down()
    }
}
