//! JWT token creation.

use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use staffdesk_core::error::AppError;
use staffdesk_core::types::UserId;
use staffdesk_entity::user::Role;

use super::claims::Claims;

/// Creates signed HS256 tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    ttl_seconds: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates an encoder for the given secret and lifetime.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_seconds: i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Sign a token whose lifetime starts at `now`.
    pub fn issue_at(&self, user_id: UserId, role: Role, now: DateTime<Utc>) -> Result<String, AppError> {
        let iat = now.timestamp();
        let claims = Claims {
            sub: user_id,
            role,
            iat,
            exp: iat.saturating_add(self.ttl_seconds),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }
}
