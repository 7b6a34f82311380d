//! # REST API Interface Layer
//!
//! One router per resource, merged under `/api` by [`api_router`]. Handlers
//! are thin: they log the request, call a domain service and map the result.

pub mod board_apis;
pub mod child_apis;
pub mod completion_apis;
pub mod errors;
pub mod mappers;
pub mod task_apis;

use axum::Router;

use crate::AppState;

/// Every resource router, with paths relative to `/api`
pub fn api_router() -> Router<AppState> {
    let children = child_apis::router()
        .merge(board_apis::router())
        .merge(completion_apis::router());

    Router::new()
        .nest("/children", children)
        .nest("/tasks", task_apis::router())
}
