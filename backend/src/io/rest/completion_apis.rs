//! # REST API for Task Completions

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::{error, info};

use super::errors::{error_response, ApiError};
use super::mappers::CompletionMapper;
use crate::domain::commands::completion::CompleteTaskCommand;
use crate::AppState;
use shared::{CompleteTaskRequest, CompleteTaskResponse, CompletionListResponse};

/// Create the completion API router, relative to `/api/children`
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/:child_id/completions",
        get(list_completions).post(complete_task),
    )
}

/// Record that a child completed a task
pub async fn complete_task(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Json(request): Json<CompleteTaskRequest>,
) -> Result<(StatusCode, Json<CompleteTaskResponse>), ApiError> {
    info!("POST /api/children/{}/completions - request: {:?}", child_id, request);

    let command = CompleteTaskCommand {
        child_id,
        task_id: request.task_id,
        notes: request.notes,
    };

    match state.task_board_service.complete_task(command).await {
        Ok(completed) => Ok((
            StatusCode::CREATED,
            Json(CompletionMapper::to_complete_task_response(completed)),
        )),
        Err(e) => {
            error!("Failed to complete task: {}", e);
            Err(error_response(&e))
        }
    }
}

/// Completion log of a child, oldest first
pub async fn list_completions(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> Result<Json<CompletionListResponse>, ApiError> {
    info!("GET /api/children/{}/completions", child_id);

    let result = match state.child_service.require_child(&child_id).await {
        Ok(child) => state.completion_service.list_completions(&child.id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(completions) => Ok(Json(CompletionMapper::to_completion_list_dto(completions))),
        Err(e) => {
            error!("Failed to list completions for child {}: {}", child_id, e);
            Err(error_response(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::TestBackend;
    use axum::{
        body::Body,
        http::{Method, Request},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt; // for `oneshot`

    fn complete_request(child_id: &str, task_id: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(format!("/{}/completions", child_id))
            .header("content-type", "application/json")
            .body(Body::from(json!({ "task_id": task_id, "notes": "so fun" }).to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_complete_task_twice() {
        let backend = TestBackend::new().await;
        let child = backend.create_child("Mia", 5).await;
        let task = backend.create_task("Count shells", 3, 6).await;
        let app = router().with_state(backend.app_state());

        let mut responses = Vec::new();
        for _ in 0..2 {
            let response = app.clone().oneshot(complete_request(&child.id, &task.id)).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
            responses.push(serde_json::from_slice::<CompleteTaskResponse>(&body).unwrap());
        }

        assert_eq!(responses[0].completion_count, 1);
        assert_eq!(responses[1].completion_count, 2);
        assert_ne!(responses[0].completion.id, responses[1].completion.id);
        assert_eq!(responses[1].reward_message, task.reward_message);
        assert_eq!(responses[1].reward_display_ms, 4000);
        assert_eq!(responses[1].completion.notes.as_deref(), Some("so fun"));

        let request = Request::builder()
            .uri(format!("/{}/completions", child.id))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let log: CompletionListResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(log.completions.len(), 2);
    }

    #[tokio::test]
    async fn test_complete_unknown_task() {
        let backend = TestBackend::new().await;
        let child = backend.create_child("Mia", 5).await;
        let app = router().with_state(backend.app_state());

        let response = app.oneshot(complete_request(&child.id, "task::missing")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_completions_for_missing_child() {
        let app = router().with_state(TestBackend::new().await.app_state());

        let request = Request::builder()
            .uri("/child::missing/completions")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
