//! Response envelopes shared by every API endpoint.

use serde::{Deserialize, Serialize};

/// Standard success envelope.
///
/// `data` is always an object keyed by the payload name
/// (e.g. `{"department": {...}}`), which the client relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `"success"`.
    pub status: String,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Bearer token (signup and login only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response carrying data.
    pub fn ok(data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: None,
            token: None,
            data: Some(data),
        }
    }

    /// Attaches a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches a bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

impl ApiResponse<()> {
    /// Creates a successful response with only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.into()),
            token: None,
            data: None,
        }
    }
}

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// `"fail"` for client errors, `"error"` for server errors.
    pub status: String,
    /// Human-readable message.
    pub message: String,
    /// Itemized validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    /// Field named by a uniqueness conflict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiErrorResponse {
    /// Client-error body with only a message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail".to_string(),
            message: message.into(),
            errors: None,
            field: None,
        }
    }

    /// Server-error body with only a message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            errors: None,
            field: None,
        }
    }
}
