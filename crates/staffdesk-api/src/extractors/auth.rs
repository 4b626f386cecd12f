//! `AuthUser` extractor: resolves the bearer token into a [`Principal`].

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use staffdesk_auth::gateway::Principal;
use staffdesk_core::error::AppError;

use crate::state::AppState;

/// Authenticated caller available in handlers.
///
/// Declare it before any body extractor so a request without valid
/// credentials is rejected before its body is read.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl AuthUser {
    /// Returns the inner `Principal`.
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Principal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let principal = state.authenticator.authenticate(header).await?;
        Ok(AuthUser(principal))
    }
}
