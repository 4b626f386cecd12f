//! # staffdesk-core
//!
//! Core crate for StaffDesk. Contains configuration schemas, typed
//! identifiers, the response envelope, and the unified error system.
//!
//! This crate has **no** internal dependencies on other StaffDesk crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
