//! # REST API for the Task Catalog

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::{error, info};

use super::errors::{error_response, invalid_input, ApiError};
use super::mappers::TaskMapper;
use crate::domain::models::Child;
use crate::AppState;
use shared::{ImportTasksRequest, ImportTasksResponse, TaskListResponse};

#[derive(Debug, Deserialize)]
pub struct TaskQuery {
    pub age: Option<i64>,
}

/// Create the task API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks))
        .route("/import", post(import_tasks))
}

/// Tasks eligible for the given age, ordered by title
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskQuery>,
) -> Result<Json<TaskListResponse>, ApiError> {
    info!("GET /api/tasks - query: {:?}", query);

    let Some(age) = query.age else {
        return Err(invalid_input("The age query parameter is required"));
    };
    let age = Child::validate_age(age).map_err(|e| error_response(&e))?;

    match state.task_service.list_tasks_for_age(age).await {
        Ok(tasks) => Ok(Json(TaskMapper::to_task_list_dto(tasks))),
        Err(e) => {
            error!("Failed to list tasks for age {}: {}", age, e);
            Err(error_response(&e))
        }
    }
}

/// Import a batch of task definitions. One invalid definition rejects the batch.
pub async fn import_tasks(
    State(state): State<AppState>,
    Json(request): Json<ImportTasksRequest>,
) -> Result<(StatusCode, Json<ImportTasksResponse>), ApiError> {
    info!("POST /api/tasks/import - {} definitions", request.tasks.len());

    if request.tasks.is_empty() {
        return Err(invalid_input("No task definitions to import"));
    }

    match state.task_service.import_tasks(TaskMapper::to_commands(request)).await {
        Ok(tasks) => Ok((StatusCode::CREATED, Json(TaskMapper::to_import_response(tasks)))),
        Err(e) => {
            error!("Failed to import tasks: {}", e);
            Err(error_response(&e))
        }
    }
}
