//! # staffdesk-service
//!
//! Business logic for StaffDesk. Each service validates its input,
//! applies the directory rules, and delegates persistence to the stores.
//!
//! Services follow constructor injection: every dependency is provided at
//! construction time via `Arc` references.

pub mod auth;
pub mod department;
pub mod employee;
pub mod validation;

pub use auth::AuthService;
pub use department::DepartmentService;
pub use employee::{EmployeeService, LinkResolver};
