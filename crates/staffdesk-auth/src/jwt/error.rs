//! Token verification failures.

use thiserror::Error;

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature is valid but `exp` has passed.
    #[error("token has expired")]
    Expired,
    /// The token cannot be parsed or lacks required claims.
    #[error("token is malformed")]
    Malformed,
    /// The signature does not match the signing secret.
    #[error("token signature is invalid")]
    InvalidSignature,
}
