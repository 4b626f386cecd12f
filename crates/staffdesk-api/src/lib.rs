//! # staffdesk-api
//!
//! HTTP API layer for StaffDesk built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, request logging,
//! timeouts), extractors, DTOs, and server bootstrap.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
