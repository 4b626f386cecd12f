//! JWT claims payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use staffdesk_core::types::UserId;
use staffdesk_entity::user::Role;

/// Claims embedded in every bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: UserId,
    /// Role at issuance. Authorization uses the stored role instead.
    pub role: Role,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiration (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> UserId {
        self.sub
    }

    /// Whether the token is past its expiry at `now`. The `exp` second itself is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.exp
    }
}
