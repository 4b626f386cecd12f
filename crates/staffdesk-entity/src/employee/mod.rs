//! Employee domain entities.

pub mod filter;
pub mod model;
pub mod validation;

pub use filter::EmployeeFilter;
pub use model::{Employee, EmployeeChanges, EmployeeView, LinkChange, NewEmployee};
