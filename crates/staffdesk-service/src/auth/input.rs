//! Request bodies for the authentication endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Signup body. Any `role` the client sends is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignupInput {
    /// Email.
    #[validate(
        required(message = "Email is required."),
        custom(function = "crate::validation::check_email")
    )]
    pub email: Option<String>,
    /// Password.
    #[validate(required(message = "Password is required."))]
    pub password: Option<String>,
}

/// Login body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginInput {
    /// Email.
    pub email: Option<String>,
    /// Password.
    pub password: Option<String>,
}

/// Admin account-creation body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserInput {
    /// Email.
    pub email: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Requested role; only `HR` and `admin` are accepted.
    pub role: Option<String>,
}

/// Treat a blank string as missing.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
