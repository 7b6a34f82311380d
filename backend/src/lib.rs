//! # Learning Tracker Backend
//!
//! Everything behind the presentation layer of the learning tracker:
//! - **Domain**: Eligibility, completion tracking and progress rules
//! - **Storage**: SQLite persistence for children, tasks and completions
//! - **IO**: REST API the presentation layer talks to
//!
//! ## Architecture
//!
//! ```text
//! Presentation layer
//!     ↓
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (progress engine, task board, services)
//!     ↓
//! Storage Layer (storage traits, SQLite repositories)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{ChildService, CompletionService, TaskBoardService, TaskService};
use crate::storage::{ChildRepository, CompletionRepository, DbConnection, TaskRepository};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub child_service: ChildService,
    pub task_service: TaskService,
    pub completion_service: CompletionService,
    pub task_board_service: TaskBoardService,
}

impl AppState {
    /// Wire every service over one database connection
    pub fn new(db: DbConnection) -> Self {
        let child_service = ChildService::new(Arc::new(ChildRepository::new(db.clone())));
        let task_service = TaskService::new(Arc::new(TaskRepository::new(db.clone())));
        let completion_service = CompletionService::new(Arc::new(CompletionRepository::new(db)));
        let task_board_service = TaskBoardService::new(
            child_service.clone(),
            task_service.clone(),
            completion_service.clone(),
        );

        Self {
            child_service,
            task_service,
            completion_service,
            task_board_service,
        }
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up database");
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    let app_state = AppState::new(db);

    if config.seed_catalog {
        let seeded = app_state
            .task_service
            .seed_starter_catalog()
            .await
            .context("Failed to seed the starter catalog")?;
        info!("Starter catalog seeding added {} tasks", seeded);
    }

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Result<Router> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?;

    // CORS setup to allow the presentation layer to make requests
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", io::rest::api_router())
        .layer(cors)
        .with_state(app_state))
}
