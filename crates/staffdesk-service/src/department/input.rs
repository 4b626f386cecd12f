//! Request bodies for department writes.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body for creating a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentInput {
    /// Department name.
    #[validate(
        required(message = "Department name is required."),
        custom(function = "crate::validation::check_department_name")
    )]
    pub name: Option<String>,
}

/// Body for updating a department. An omitted name changes nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDepartmentInput {
    /// New name.
    #[validate(custom(function = "crate::validation::check_department_name"))]
    pub name: Option<String>,
}
