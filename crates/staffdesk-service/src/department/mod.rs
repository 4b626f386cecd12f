//! Department operations.

pub mod input;
pub mod service;

pub use input::{CreateDepartmentInput, UpdateDepartmentInput};
pub use service::DepartmentService;
