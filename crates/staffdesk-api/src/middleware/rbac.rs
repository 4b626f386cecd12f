//! Role guards applied inside handlers once the caller is known.

use staffdesk_auth::rbac;
use staffdesk_core::error::AppError;

use crate::extractors::AuthUser;

/// Checks that the caller is `HR` or `admin`.
pub fn require_manager(auth: &AuthUser) -> Result<(), AppError> {
    rbac::require_manager(auth.principal())
}

/// Checks that the caller is `admin`.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    rbac::require_admin(auth.principal())
}
