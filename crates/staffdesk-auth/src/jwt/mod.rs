//! JWT token encoding, decoding, and claims.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
pub use error::TokenError;

use chrono::{DateTime, Utc};

use staffdesk_core::config::AuthConfig;
use staffdesk_core::result::AppResult;
use staffdesk_core::types::UserId;
use staffdesk_entity::user::Role;

/// Issues and verifies bearer tokens with the configured secret and TTL.
#[derive(Debug, Clone)]
pub struct TokenService {
    encoder: JwtEncoder,
    decoder: JwtDecoder,
}

impl TokenService {
    /// Build from auth configuration, rejecting an unusable secret or TTL.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            encoder: JwtEncoder::new(config.jwt_secret.as_bytes(), config.token_ttl()?),
            decoder: JwtDecoder::new(config.jwt_secret.as_bytes()),
        })
    }

    /// Issue a token for `user_id` valid from now.
    pub fn issue(&self, user_id: UserId, role: Role) -> AppResult<String> {
        self.encoder.issue_at(user_id, role, Utc::now())
    }

    /// Issue a token as of `now`.
    pub fn issue_at(&self, user_id: UserId, role: Role, now: DateTime<Utc>) -> AppResult<String> {
        self.encoder.issue_at(user_id, role, now)
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.decoder.verify_at(token, Utc::now())
    }

    /// Verify a token as of `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        self.decoder.verify_at(token, now)
    }
}
