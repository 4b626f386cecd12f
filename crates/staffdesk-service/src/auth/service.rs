//! Provisioning and credential checks.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use staffdesk_auth::gateway::Principal;
use staffdesk_auth::jwt::TokenService;
use staffdesk_auth::password::{PasswordHasher, PasswordPolicy};
use staffdesk_core::error::{AppError, ErrorKind};
use staffdesk_database::store::UserStore;
use staffdesk_entity::employee::validation::validate_email;
use staffdesk_entity::user::{NewUser, PublicUser, Role, normalize_email};

use super::input::{CreateUserInput, LoginInput, SignupInput, present};
use crate::validation::{messages, rule};

/// Message for a failed login, identical for unknown email and wrong password.
pub const BAD_CREDENTIALS: &str = "Incorrect email or password.";
/// Message for a signup email that is already registered.
pub const SIGNUP_EMAIL_TAKEN: &str = "Email already exists. Please use a different email.";

/// A signed token together with the account it was issued for.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// Bearer token.
    pub token: String,
    /// The account.
    pub user: PublicUser,
}

/// Handles account creation and credential checks.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    policy: Arc<PasswordPolicy>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        policy: Arc<PasswordPolicy>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            policy,
            tokens,
        }
    }

    /// Self-registration. The new account is always an `employee`.
    pub async fn signup(&self, input: SignupInput) -> Result<AuthOutcome, AppError> {
        let mut errors = match input.validate() {
            Ok(()) => Vec::new(),
            Err(e) => messages(&e),
        };
        if let Some(violation) = input.password.as_deref().and_then(|p| self.policy.violation(p)) {
            errors.push(violation);
        }
        if !errors.is_empty() {
            return Err(AppError::validation_failed(errors));
        }

        let email = normalize_email(input.email.as_deref().unwrap_or_default());
        let password = input.password.unwrap_or_default();

        let user = self
            .store_user(email, &password, Role::Employee)
            .await
            .map_err(|e| {
                if e.is(ErrorKind::Conflict) {
                    AppError::conflict("email", SIGNUP_EMAIL_TAKEN)
                } else {
                    e
                }
            })?;

        info!(user_id = %user.id, "Account signed up");

        let token = self.tokens.issue(user.id, user.role)?;
        Ok(AuthOutcome { token, user })
    }

    /// Check credentials and issue a token.
    pub async fn login(&self, input: LoginInput) -> Result<AuthOutcome, AppError> {
        let (Some(email), Some(password)) = (present(&input.email), present(&input.password))
        else {
            return Err(AppError::bad_request("Please provide email and password."));
        };

        let user = self
            .users
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_else(|| AppError::unauthenticated(BAD_CREDENTIALS))?;

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::unauthenticated(BAD_CREDENTIALS));
        }

        info!(user_id = %user.id, "User logged in");

        let token = self.tokens.issue(user.id, user.role)?;
        Ok(AuthOutcome {
            token,
            user: PublicUser::from(user),
        })
    }

    /// Provision an `HR` or `admin` account on behalf of an admin.
    pub async fn create_user(
        &self,
        actor: &Principal,
        input: CreateUserInput,
    ) -> Result<PublicUser, AppError> {
        let (Some(email), Some(password), Some(role)) = (
            present(&input.email),
            present(&input.password),
            present(&input.role),
        ) else {
            return Err(AppError::bad_request(
                "Email, password, and role are required.",
            ));
        };

        let role = match role.parse::<Role>() {
            Ok(role) if role.can_manage() => role,
            _ => {
                return Err(AppError::forbidden(
                    "Cannot create users with the \"employee\" role via this endpoint.",
                ));
            }
        };

        let email = rule(validate_email(email))?;
        self.policy.validate(password)?;

        let user = self.store_user(email, password, role).await?;
        info!(actor = %actor.id, user_id = %user.id, role = %user.role, "Account created by admin");
        Ok(user)
    }

    /// Create an account directly, bypassing the HTTP role gate.
    ///
    /// Used by the CLI to bootstrap the first admin.
    pub async fn bootstrap(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<PublicUser, AppError> {
        let email = rule(validate_email(email))?;
        self.policy.validate(password)?;
        let user = self.store_user(email, password, role).await?;
        info!(user_id = %user.id, role = %user.role, "Account bootstrapped");
        Ok(user)
    }

    /// The caller's public profile.
    pub fn me(&self, principal: &Principal) -> PublicUser {
        PublicUser::from(principal)
    }

    /// Every account, ordered by email.
    pub async fn list_users(&self) -> Result<Vec<PublicUser>, AppError> {
        let users = self.users.list().await?;
        Ok(users.into_iter().map(PublicUser::from).collect())
    }

    async fn store_user(
        &self,
        email: String,
        password: &str,
        role: Role,
    ) -> Result<PublicUser, AppError> {
        let password_hash = self.hasher.hash_password(password)?;
        let user = self
            .users
            .create(&NewUser {
                email,
                password_hash,
                role,
            })
            .await?;
        Ok(PublicUser::from(user))
    }
}
