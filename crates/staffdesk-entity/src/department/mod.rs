//! Department domain entities.

pub mod model;

pub use model::{Department, DepartmentChanges, DepartmentRef, NewDepartment, normalize_department_name};
