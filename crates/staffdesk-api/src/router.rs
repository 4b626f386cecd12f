//! Route definitions for the StaffDesk HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use std::time::Duration;

use axum::http::StatusCode;
use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(department_routes())
        .merge(employee_routes())
        .merge(health_routes())
        .method_not_allowed_fallback(handlers::fallback::not_found);

    Router::new()
        .nest("/api", api_routes)
        .fallback(handlers::fallback::not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Signup, login, profile, admin provisioning
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
        .route("/auth/create-user", post(handlers::auth::create_user))
}

fn department_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/departments",
            get(handlers::department::list_departments).post(handlers::department::create_department),
        )
        .route(
            "/departments/{id}",
            put(handlers::department::update_department)
                .delete(handlers::department::delete_department),
        )
}

fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(handlers::employee::list_employees).post(handlers::employee::create_employee),
        )
        .route(
            "/employees/unlinked-users",
            get(handlers::employee::list_unlinked_users),
        )
        .route(
            "/employees/{id}",
            put(handlers::employee::update_employee).delete(handlers::employee::delete_employee),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
