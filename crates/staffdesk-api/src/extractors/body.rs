//! JSON body and query extractors that reject with the standard error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use staffdesk_core::error::AppError;

/// `axum::Json` whose rejection renders as an [`AppError`].
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Query` whose rejection renders as an [`AppError`].
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct QueryParams<T>(pub T);
