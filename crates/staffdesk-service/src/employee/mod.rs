//! Employee operations and the account-link resolver.

pub mod input;
pub mod linking;
pub mod service;

pub use input::{CreateEmployeeInput, EmployeeQuery, UpdateEmployeeInput};
pub use linking::LinkResolver;
pub use service::EmployeeService;
