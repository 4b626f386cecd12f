//! Account provisioning: signup, login, admin creation, and profile.

pub mod input;
pub mod service;

pub use input::{CreateUserInput, LoginInput, SignupInput};
pub use service::{AuthOutcome, AuthService};
