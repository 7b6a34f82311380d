//! # REST API for Task Boards and Progress
//!
//! Read-only views over a child's eligible tasks and completion log.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{error, info};

use super::errors::{error_response, ApiError};
use super::mappers::BoardMapper;
use crate::domain::models::AreaFilter;
use crate::AppState;
use shared::{ProgressResponse, TaskBoardResponse};

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    pub area: Option<String>,
}

/// Create the board API router, relative to `/api/children`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:child_id/board", get(get_board))
        .route("/:child_id/progress", get(get_progress))
}

/// Task board for a child, filtered to one area when `area` is given
pub async fn get_board(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<TaskBoardResponse>, ApiError> {
    info!("GET /api/children/{}/board - area: {:?}", child_id, query.area);

    match state.task_board_service.load_board(&child_id).await {
        Ok(mut board) => {
            if let Some(area) = query.area.as_deref() {
                board.select_area(AreaFilter::parse(area));
            }
            Ok(Json(BoardMapper::to_board_response(&board)))
        }
        Err(e) => {
            error!("Failed to load board for child {}: {}", child_id, e);
            Err(error_response(&e))
        }
    }
}

/// Per-area progress for a child
pub async fn get_progress(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> Result<Json<ProgressResponse>, ApiError> {
    info!("GET /api/children/{}/progress", child_id);

    match state.task_board_service.progress(&child_id).await {
        Ok(progress) => Ok(Json(BoardMapper::to_progress_response(child_id, progress))),
        Err(e) => {
            error!("Failed to compute progress for child {}: {}", child_id, e);
            Err(error_response(&e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::TestBackend;
    use axum::{body::Body, http::{Request, StatusCode}};
    use shared::DevelopmentArea;
    use tower::util::ServiceExt; // for `oneshot`

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_board_with_area_filter() {
        let backend = TestBackend::new().await;
        let child = backend.create_child("Mia", 5).await;
        let task = backend.create_task("Count shells", 3, 6).await;
        backend.create_task("Long division", 9, 12).await;
        backend.completion_service.record_completion(&child, &task, None).await.unwrap();
        let app = router().with_state(backend.app_state());

        let response = app
            .clone()
            .oneshot(get(&format!("/{}/board", child.id)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let board: TaskBoardResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(board.selected_area, "all");
        assert_eq!(board.selected_area_label, "All Areas");
        assert_eq!(board.tasks.len(), 1);
        assert_eq!(board.tasks[0].completion_count, 1);
        assert!(board.tasks[0].is_completed);
        assert_eq!(board.tasks[0].icon, "Puzzle");
        assert_eq!(board.progress[0].area, DevelopmentArea::Cognitive);
        assert_eq!((board.progress[0].total, board.progress[0].completed), (1, 1));

        let response = app
            .oneshot(get(&format!("/{}/board?area=motor", child.id)))
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let board: TaskBoardResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(board.selected_area_label, "Physical");
        assert!(board.tasks.is_empty());
        assert_eq!(board.progress[0].completed, 1);
    }

    #[tokio::test]
    async fn test_board_with_unknown_area_is_empty() {
        let backend = TestBackend::new().await;
        let child = backend.create_child("Mia", 5).await;
        backend.create_task("Count shells", 3, 6).await;
        let app = router().with_state(backend.app_state());

        let response = app
            .oneshot(get(&format!("/{}/board?area=astronomy", child.id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let board: TaskBoardResponse = serde_json::from_slice(&body).unwrap();
        assert!(board.tasks.is_empty());
        assert_eq!(board.progress.len(), 5);
    }

    #[tokio::test]
    async fn test_progress_labels_and_order() {
        let backend = TestBackend::new().await;
        let child = backend.create_child("Leo", 8).await;
        let app = router().with_state(backend.app_state());

        let response = app
            .oneshot(get(&format!("/{}/progress", child.id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let progress: ProgressResponse = serde_json::from_slice(&body).unwrap();
        let labels: Vec<&str> = progress.areas.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["Cognitive", "Physical", "Social", "Creative", "Language"]);
        assert_eq!(progress.child_id, child.id);
    }

    #[tokio::test]
    async fn test_board_for_missing_child() {
        let app = router().with_state(TestBackend::new().await.app_state());

        let response = app.oneshot(get("/child::missing/board")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
