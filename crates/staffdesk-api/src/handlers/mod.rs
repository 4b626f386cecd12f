//! Route handlers organized by domain.

pub mod auth;
pub mod department;
pub mod employee;
pub mod fallback;
pub mod health;
