//! Application builder: wires router, middleware, and state into a server.

use axum::Router;
use tracing::{error, info};

use staffdesk_core::config::AppConfig;
use staffdesk_core::error::AppError;
use staffdesk_database::Stores;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Connect the stores, build the app, and serve until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!(provider = ?config.database.provider, "Starting StaffDesk server");

    let stores = Stores::connect(&config.database).await?;
    let addr = config.server.bind_address();
    let state = AppState::build(config, stores.clone())?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "StaffDesk server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    stores.close().await;
    info!("StaffDesk server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
