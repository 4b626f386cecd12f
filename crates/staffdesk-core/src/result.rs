//! Convenience result type alias for StaffDesk.

use crate::error::AppError;

/// A specialized `Result` type for StaffDesk operations.
pub type AppResult<T> = Result<T, AppError>;
