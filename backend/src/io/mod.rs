//! # IO Module
//!
//! Interface layer between a presentation layer and the domain logic.
//!
//! Requests arrive as JSON DTOs from the `shared` crate, are mapped onto
//! domain commands, and domain results are mapped back into DTOs. Domain
//! errors are translated into HTTP status codes with a consistent
//! `{"error", "code"}` body.
//!
//! ## Supported Operations
//!
//! - **GET/POST /api/children**: List and register children
//! - **GET /api/children/:id**: Look up one child
//! - **GET /api/children/:id/board**: Task board with cards and progress
//! - **GET /api/children/:id/progress**: Per-area progress summary
//! - **GET/POST /api/children/:id/completions**: Completion log and new completions
//! - **GET /api/tasks**: Tasks eligible for an age
//! - **POST /api/tasks/import**: Validated catalog ingestion

pub mod rest;
