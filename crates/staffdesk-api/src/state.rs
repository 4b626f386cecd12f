//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use staffdesk_auth::gateway::Authenticator;
use staffdesk_auth::jwt::TokenService;
use staffdesk_auth::password::{PasswordHasher, PasswordPolicy};
use staffdesk_core::config::AppConfig;
use staffdesk_core::result::AppResult;
use staffdesk_database::Stores;
use staffdesk_service::{AuthService, DepartmentService, EmployeeService, LinkResolver};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Credential and Directory stores.
    pub stores: Stores,
    /// Bearer-token gateway.
    pub authenticator: Arc<Authenticator>,
    /// Signup, login, and account provisioning.
    pub auth_service: Arc<AuthService>,
    /// Department operations.
    pub department_service: Arc<DepartmentService>,
    /// Employee operations.
    pub employee_service: Arc<EmployeeService>,
    /// Unlinked-account resolver.
    pub link_resolver: Arc<LinkResolver>,
}

impl AppState {
    /// Wire every service over the given stores.
    ///
    /// Fails when the signing secret or token TTL is unusable.
    pub fn build(config: AppConfig, stores: Stores) -> AppResult<Self> {
        let tokens = Arc::new(TokenService::new(&config.auth)?);
        let hasher = Arc::new(PasswordHasher::new());
        let policy = Arc::new(PasswordPolicy::new(&config.auth));

        let authenticator = Arc::new(Authenticator::new(
            Arc::clone(&tokens),
            Arc::clone(&stores.users),
        ));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            hasher,
            policy,
            tokens,
        ));
        let department_service = Arc::new(DepartmentService::new(Arc::clone(&stores.departments)));
        let employee_service = Arc::new(EmployeeService::new(Arc::clone(&stores.employees)));
        let link_resolver = Arc::new(LinkResolver::new(
            Arc::clone(&stores.users),
            Arc::clone(&stores.employees),
        ));

        Ok(Self {
            config: Arc::new(config),
            stores,
            authenticator,
            auth_service,
            department_service,
            employee_service,
            link_resolver,
        })
    }
}
