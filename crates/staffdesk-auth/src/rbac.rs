//! Role-based access control over an authenticated principal.

use staffdesk_core::error::AppError;
use staffdesk_entity::user::Role;

use crate::gateway::Principal;

/// Message for a principal whose role is not allowed.
pub const FORBIDDEN_MESSAGE: &str = "You do not have permission to perform this action.";

/// Roles permitted to manage departments and employees.
pub const MANAGERS: &[Role] = &[Role::Hr, Role::Admin];

/// Roles permitted to provision accounts.
pub const ADMINS: &[Role] = &[Role::Admin];

/// Fail with `Forbidden` unless the principal's role is in `allowed`.
pub fn authorize(principal: &Principal, allowed: &[Role]) -> Result<(), AppError> {
    if allowed.contains(&principal.role) {
        Ok(())
    } else {
        Err(AppError::forbidden(FORBIDDEN_MESSAGE))
    }
}

/// Require HR or admin.
pub fn require_manager(principal: &Principal) -> Result<(), AppError> {
    authorize(principal, MANAGERS)
}

/// Require admin.
pub fn require_admin(principal: &Principal) -> Result<(), AppError> {
    authorize(principal, ADMINS)
}
