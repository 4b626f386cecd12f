//! Department entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use staffdesk_core::types::DepartmentId;

/// A department in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Unique department identifier.
    pub id: DepartmentId,
    /// Unique, trimmed name.
    pub name: String,
    /// When the department was created.
    pub created_at: DateTime<Utc>,
    /// When the department was last updated.
    pub updated_at: DateTime<Utc>,
}

/// The `{id, name}` pair embedded in employee views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRef {
    /// Department ID.
    pub id: DepartmentId,
    /// Department name.
    pub name: String,
}

impl From<&Department> for DepartmentRef {
    fn from(department: &Department) -> Self {
        Self {
            id: department.id,
            name: department.name.clone(),
        }
    }
}

/// Data required to create a department.
#[derive(Debug, Clone)]
pub struct NewDepartment {
    /// Normalized name.
    pub name: String,
}

/// Partial update of a department. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct DepartmentChanges {
    /// New normalized name.
    pub name: Option<String>,
}

impl DepartmentChanges {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// Trim a department name, rejecting a blank result.
pub fn normalize_department_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        Err("Department name is required.")
    } else {
        Ok(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        assert_eq!(normalize_department_name("  Sales ").unwrap(), "Sales");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            normalize_department_name("   "),
            Err("Department name is required.")
        );
    }
}
