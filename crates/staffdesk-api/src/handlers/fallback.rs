//! Handler for unmatched routes and methods.

use axum::extract::OriginalUri;

use staffdesk_core::error::AppError;

/// Any route or method that is not served.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str());
    AppError::not_found(format!("Can't find {path} on this server!"))
}
