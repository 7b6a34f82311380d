//! # Domain Module
//!
//! Contains the business logic of the learning tracker.
//!
//! The domain decides which learning tasks a child may see, records task
//! completions and derives per-area progress from them. It does not know
//! about HTTP or SQL: storage is reached through the traits in
//! [`crate::storage`], and the REST layer maps its own DTOs onto the
//! commands in [`commands`].
//!
//! ## Module Organization
//!
//! - **progress_engine**: Pure eligibility, filtering, completion and progress rules
//! - **task_board**: Caller-held state for one selected child, including the reward banner
//! - **icons**: Symbolic icon names resolved against a fixed table
//! - **child_service**: Registering and looking up child profiles
//! - **task_service**: Age-filtered catalog reads and validated catalog ingestion
//! - **completion_service**: The append-only completion log
//! - **task_board_service**: Loads boards and completes tasks across the other services
//!
//! ## Business Rules
//!
//! - A task is eligible when `min_age <= child.age <= max_age`
//! - Completing a task always appends a new completion; repeats are counted
//! - Progress counts a task as completed once, however often it was repeated
//! - Progress areas are always reported as cognitive, motor, social, creative, language
//! - Completion state is only ever derived from the selected child's own log
//! - A completion reaches a board only after storage has confirmed it

pub mod child_service;
pub mod commands;
pub mod completion_service;
pub mod errors;
pub mod icons;
pub mod models;
pub mod progress_engine;
pub mod task_board;
pub mod task_board_service;
pub mod task_service;

pub use child_service::ChildService;
pub use completion_service::CompletionService;
pub use errors::TrackerError;
pub use task_board::{TaskBoard, REWARD_DISPLAY_DURATION};
pub use task_board_service::TaskBoardService;
pub use task_service::TaskService;
