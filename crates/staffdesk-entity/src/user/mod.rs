//! User domain entities.

pub mod model;
pub mod role;

pub use model::{NewUser, PublicUser, User, normalize_email};
pub use role::Role;
