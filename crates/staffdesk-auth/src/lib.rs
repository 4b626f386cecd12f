//! # staffdesk-auth
//!
//! Authentication and authorization for StaffDesk.
//!
//! ## Modules
//!
//! - `jwt`: HS256 token issuance and verification
//! - `password`: Argon2id hashing and the minimum-length policy
//! - `gateway`: bearer-token authentication into a [`Principal`]
//! - `rbac`: role checks against the principal

pub mod gateway;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use gateway::{Authenticator, Principal};
pub use jwt::{Claims, TokenError, TokenService};
pub use password::{PasswordHasher, PasswordPolicy};
