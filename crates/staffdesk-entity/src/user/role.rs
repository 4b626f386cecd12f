//! Role enumeration shared by login accounts and employee records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC system.
///
/// The wire and storage spelling is exactly `employee`, `HR`, `admin`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role")]
pub enum Role {
    /// Regular staff member; read-only access to the directory.
    #[default]
    #[serde(rename = "employee")]
    #[sqlx(rename = "employee")]
    Employee,
    /// Human resources; manages departments and employees.
    #[serde(rename = "HR")]
    #[sqlx(rename = "HR")]
    Hr,
    /// Full administrator; additionally provisions accounts.
    #[serde(rename = "admin")]
    #[sqlx(rename = "admin")]
    Admin,
}

impl Role {
    /// Whether this role may create, update, and delete directory records.
    pub fn can_manage(&self) -> bool {
        matches!(self, Self::Hr | Self::Admin)
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role in its wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Hr => "HR",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = staffdesk_core::AppError;

    /// Parses the exact wire spelling; `"hr"` or `"Admin"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "employee" => Ok(Self::Employee),
            "HR" => Ok(Self::Hr),
            "admin" => Ok(Self::Admin),
            _ => Err(staffdesk_core::AppError::validation(
                "Role must be one of: employee, HR, admin.",
            )),
        }
    }
}
