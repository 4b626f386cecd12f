//! # staffdesk-entity
//!
//! Domain entities for StaffDesk: login accounts and their roles,
//! departments, and employee records with their optional account link.

pub mod department;
pub mod employee;
pub mod user;

pub use department::Department;
pub use employee::{Employee, EmployeeView};
pub use user::{PublicUser, Role, User};
