//! Response payloads. Each wraps its value under the key the client reads.

use serde::Serialize;

use staffdesk_entity::department::Department;
use staffdesk_entity::employee::EmployeeView;
use staffdesk_entity::user::PublicUser;

pub use staffdesk_core::types::response::{ApiErrorResponse, ApiResponse};

/// `{ "user": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct UserData {
    pub user: PublicUser,
}

/// `{ "departments": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentsData {
    pub departments: Vec<Department>,
}

/// `{ "department": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct DepartmentData {
    pub department: Department,
}

/// `{ "employees": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct EmployeesData {
    pub employees: Vec<EmployeeView>,
}

/// `{ "employee": ... }`
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeData {
    pub employee: EmployeeView,
}

/// `{ "unlinkedUsers": [...] }`
#[derive(Debug, Clone, Serialize)]
pub struct UnlinkedUsersData {
    #[serde(rename = "unlinkedUsers")]
    pub unlinked_users: Vec<PublicUser>,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthData {
    /// `"ok"` when every dependency answered.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Store reachability.
    pub database: String,
}
