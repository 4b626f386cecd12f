//! Bearer-token authentication.
//!
//! Turns an `Authorization` header into a [`Principal`], resolving the
//! account from the Credential Store on every request.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use staffdesk_core::error::AppError;
use staffdesk_core::types::UserId;
use staffdesk_database::store::UserStore;
use staffdesk_entity::user::{PublicUser, Role, User};

use crate::jwt::{TokenError, TokenService};

/// Message for a request without a bearer token.
pub const NOT_LOGGED_IN: &str = "You are not logged in! Please log in to get access.";
/// Message for a token that is malformed or wrongly signed.
pub const INVALID_TOKEN: &str = "Invalid token. Please log in again.";
/// Message for an expired token.
pub const EXPIRED_TOKEN: &str = "Your token has expired! Please log in again.";
/// Message for a token whose account has been removed.
pub const USER_GONE: &str = "The user belonging to this token no longer exists.";

/// The authenticated caller, built once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    /// Account ID.
    pub id: UserId,
    /// Account email.
    pub email: String,
    /// Stored role.
    pub role: Role,
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<&Principal> for PublicUser {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id,
            email: principal.email.clone(),
            role: principal.role,
        }
    }
}

/// Extract the token from a `Bearer <token>` header value.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    let token = header?.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

/// Verifies tokens and resolves their accounts.
#[derive(Debug, Clone)]
pub struct Authenticator {
    tokens: Arc<TokenService>,
    users: Arc<dyn UserStore>,
}

impl Authenticator {
    /// Creates an authenticator.
    pub fn new(tokens: Arc<TokenService>, users: Arc<dyn UserStore>) -> Self {
        Self { tokens, users }
    }

    /// Authenticate the raw `Authorization` header value.
    pub async fn authenticate(&self, header: Option<&str>) -> Result<Principal, AppError> {
        let token =
            bearer_token(header).ok_or_else(|| AppError::unauthenticated(NOT_LOGGED_IN))?;

        let claims = self.tokens.verify(token).map_err(|e| {
            debug!(error = %e, "Rejected bearer token");
            match e {
                TokenError::Expired => AppError::unauthenticated(EXPIRED_TOKEN),
                TokenError::Malformed | TokenError::InvalidSignature => {
                    AppError::unauthenticated(INVALID_TOKEN)
                }
            }
        })?;

        let user = self
            .users
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::unauthenticated(USER_GONE))?;

        Ok(Principal::from(user))
    }
}
