//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use staffdesk_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthData};
use crate::state::AppState;

/// GET /api/health
///
/// Returns 503 when the store does not answer.
pub async fn health(State(state): State<AppState>) -> Result<Json<ApiResponse<HealthData>>, AppError> {
    if let Err(e) = state.stores.health_check().await {
        warn!(error = %e, "Store health check failed");
        return Err(AppError::service_unavailable("Database is unreachable."));
    }

    Ok(Json(ApiResponse::ok(HealthData {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: "connected".to_string(),
    })))
}
