//! Request bodies accepted by the API.
//!
//! The shapes and their validation rules live in the service layer; they
//! are re-exported here so handlers have a single import point.

pub use staffdesk_service::auth::{CreateUserInput, LoginInput, SignupInput};
pub use staffdesk_service::department::{CreateDepartmentInput, UpdateDepartmentInput};
pub use staffdesk_service::employee::{CreateEmployeeInput, EmployeeQuery, UpdateEmployeeInput};
