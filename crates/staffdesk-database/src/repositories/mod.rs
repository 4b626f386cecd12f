//! PostgreSQL implementations of the store traits.

pub mod department;
pub mod employee;
pub mod user;


pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use user::UserRepository;

use staffdesk_core::error::{AppError, ErrorKind};

use crate::store::{
    DUPLICATE_DEPARTMENT_NAME, DUPLICATE_EMPLOYEE_EMAIL, DUPLICATE_USER_EMAIL,
    DUPLICATE_USER_LINK, UNKNOWN_DEPARTMENT, UNKNOWN_USER,
};

/// Name of the constraint a database error violated, if any.
pub(crate) fn violated_constraint(err: &sqlx::Error) -> Option<&str> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}

/// Translate a failed write into a domain error by constraint name.
pub(crate) fn map_write_error(err: sqlx::Error, context: &'static str) -> AppError {
    let constraint = violated_constraint(&err).map(str::to_owned);
    match constraint.as_deref() {
        Some("users_email_key") => AppError::conflict("email", DUPLICATE_USER_EMAIL),
        Some("departments_name_key") => AppError::conflict("name", DUPLICATE_DEPARTMENT_NAME),
        Some("employees_email_key") => AppError::conflict("email", DUPLICATE_EMPLOYEE_EMAIL),
        Some("employees_user_id_key") => AppError::conflict("user_id", DUPLICATE_USER_LINK),
        Some("employees_department_id_fkey") => AppError::validation(UNKNOWN_DEPARTMENT),
        Some("employees_user_id_fkey") => AppError::validation(UNKNOWN_USER),
        _ => AppError::with_source(ErrorKind::Database, context, err),
    }
}

/// Wrap a failed read.
pub(crate) fn map_read_error(err: sqlx::Error, context: &'static str) -> AppError {
    AppError::with_source(ErrorKind::Database, context, err)
}
