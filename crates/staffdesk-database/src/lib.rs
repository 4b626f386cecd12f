//! # staffdesk-database
//!
//! Persistence for StaffDesk: the store traits the service layer depends
//! on, their PostgreSQL implementations, and an in-memory store used by the
//! `memory` provider and by tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::Stores;
pub use store::{DepartmentStore, EmployeeStore, UserStore};
