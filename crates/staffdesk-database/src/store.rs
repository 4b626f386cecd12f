//! Store traits consumed by the service layer.
//!
//! Each backend enforces uniqueness and referential rules itself, so a
//! racing pair of writes yields exactly one success. Violations come back
//! as `Conflict` (with the offending field) or `Validation` errors.

use async_trait::async_trait;

use staffdesk_core::result::AppResult;
use staffdesk_core::types::{DepartmentId, EmployeeId, UserId};
use staffdesk_entity::department::{Department, DepartmentChanges, NewDepartment};
use staffdesk_entity::employee::{EmployeeChanges, EmployeeFilter, EmployeeView, NewEmployee};
use staffdesk_entity::user::{NewUser, User};

/// Message for a department lookup miss.
pub const DEPARTMENT_NOT_FOUND: &str = "Department not found.";
/// Message for an employee lookup miss.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found.";
/// Message for an employee referencing an unknown department.
pub const UNKNOWN_DEPARTMENT: &str = "Department does not exist.";
/// Message for an employee referencing an unknown account.
pub const UNKNOWN_USER: &str = "Linked user account does not exist.";
/// Message for a duplicate account email.
pub const DUPLICATE_USER_EMAIL: &str = "Email already exists.";
/// Message for a duplicate department name.
pub const DUPLICATE_DEPARTMENT_NAME: &str = "Duplicate department name.";
/// Message for a duplicate employee email.
pub const DUPLICATE_EMPLOYEE_EMAIL: &str = "An employee with this email already exists.";
/// Message for an account already linked to another employee.
pub const DUPLICATE_USER_LINK: &str = "This user account is already linked to another employee.";
/// Message for deleting a department that still has employees.
pub const DEPARTMENT_IN_USE: &str = "Cannot delete a department that still has employees assigned.";

/// Credential Store.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an account by ID.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find an account by normalized email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert an account. A taken email is a `Conflict` on `email`.
    async fn create(&self, data: &NewUser) -> AppResult<User>;

    /// All accounts ordered by email.
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Department half of the Directory Store.
#[async_trait]
pub trait DepartmentStore: Send + Sync + std::fmt::Debug + 'static {
    /// All departments ordered by name.
    async fn list(&self) -> AppResult<Vec<Department>>;

    /// Insert a department. A taken name is a `Conflict` on `name`.
    async fn create(&self, data: &NewDepartment) -> AppResult<Department>;

    /// Apply a partial update, `NotFound` when absent.
    async fn update(&self, id: DepartmentId, changes: &DepartmentChanges) -> AppResult<Department>;

    /// Delete a department, `NotFound` when absent and `Conflict` while
    /// employees still reference it.
    async fn delete(&self, id: DepartmentId) -> AppResult<()>;
}

/// Employee half of the Directory Store.
#[async_trait]
pub trait EmployeeStore: Send + Sync + std::fmt::Debug + 'static {
    /// Matching employees with references resolved, ordered by name.
    async fn list(&self, filter: &EmployeeFilter) -> AppResult<Vec<EmployeeView>>;

    /// Insert an employee after checking its references and unique fields.
    async fn create(&self, data: &NewEmployee) -> AppResult<EmployeeView>;

    /// Apply a partial update, `NotFound` when absent.
    async fn update(&self, id: EmployeeId, changes: &EmployeeChanges) -> AppResult<EmployeeView>;

    /// Delete an employee, `NotFound` when absent.
    async fn delete(&self, id: EmployeeId) -> AppResult<()>;

    /// Every account ID currently linked to an employee.
    async fn linked_user_ids(&self) -> AppResult<Vec<UserId>>;
}
