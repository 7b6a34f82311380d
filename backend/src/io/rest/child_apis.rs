//! # REST API for Child Profiles
//!
//! Endpoints for registering children and looking them up. Profiles are
//! immutable once created.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::{error, info};

use super::errors::{error_response, ApiError};
use super::mappers::ChildMapper;
use crate::AppState;
use shared::{Child, ChildListResponse, ChildResponse, CreateChildRequest};

/// Create the child API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_children).post(create_child))
        .route("/:child_id", get(get_child))
}

/// Register a new child
pub async fn create_child(
    State(state): State<AppState>,
    Json(request): Json<CreateChildRequest>,
) -> Result<(StatusCode, Json<ChildResponse>), ApiError> {
    info!("POST /api/children - request: {:?}", request);

    match state.child_service.create_child(ChildMapper::to_command(request)).await {
        Ok(child) => Ok((StatusCode::CREATED, Json(ChildMapper::to_child_response(child)))),
        Err(e) => {
            error!("Failed to create child: {}", e);
            Err(error_response(&e))
        }
    }
}

/// Get a child by ID
pub async fn get_child(
    State(state): State<AppState>,
    Path(child_id): Path<String>,
) -> Result<Json<Child>, ApiError> {
    info!("GET /api/children/{}", child_id);

    match state.child_service.require_child(&child_id).await {
        Ok(child) => Ok(Json(ChildMapper::to_dto(child))),
        Err(e) => {
            error!("Failed to get child {}: {}", child_id, e);
            Err(error_response(&e))
        }
    }
}

/// List all children, newest first
pub async fn list_children(State(state): State<AppState>) -> Result<Json<ChildListResponse>, ApiError> {
    info!("GET /api/children");

    match state.child_service.list_children().await {
        Ok(children) => Ok(Json(ChildMapper::to_child_list_dto(children))),
        Err(e) => {
            error!("Failed to list children: {}", e);
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

    async fn setup_test_app() -> Router {
        router().with_state(TestBackend::new().await.app_state())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_child() {
        let app = setup_test_app().await;

        let response = app
            .clone()
            .oneshot(post_json("/", json!({ "name": "Mia", "age": 5 })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let created: ChildResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.child.name, "Mia");
        assert_eq!(created.child.age, 5);

        let response = app.oneshot(get(&format!("/{}", created.child.id))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let fetched: Child = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched, created.child);
    }

    #[tokio::test]
    async fn test_create_child_with_invalid_age() {
        let app = setup_test_app().await;

        let response = app
            .oneshot(post_json("/", json!({ "name": "Mia", "age": 19 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_json["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_get_missing_child() {
        let app = setup_test_app().await;

        let response = app.oneshot(get("/child::missing")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let error_json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_list_children() {
        let app = setup_test_app().await;
        for name in ["Ada", "Ben"] {
            let response = app
                .clone()
                .oneshot(post_json("/", json!({ "name": name, "age": 6 })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app.oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let list: ChildListResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(list.children.len(), 2);
    }
}
