//! Password policy for new accounts.

use staffdesk_core::config::AuthConfig;
use staffdesk_core::error::AppError;

/// Minimum-length policy applied at signup and admin creation.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// The message for a too-short password, if `password` violates the policy.
    pub fn violation(&self, password: &str) -> Option<String> {
        (password.chars().count() < self.min_length).then(|| {
            format!(
                "Password must be at least {} characters long.",
                self.min_length
            )
        })
    }

    /// Validate a password, failing with a validation error.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        match self.violation(password) {
            Some(message) => Err(AppError::validation(message)),
            None => Ok(()),
        }
    }
}
