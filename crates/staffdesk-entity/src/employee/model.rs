//! Employee entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use staffdesk_core::types::{DepartmentId, EmployeeId, UserId};

use crate::department::DepartmentRef;
use crate::user::{PublicUser, Role};

/// An employee record in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// Full name (letters and whitespace).
    pub name: String,
    /// Unique, lower-cased email address.
    pub email: String,
    /// Owning department.
    pub department_id: DepartmentId,
    /// Directory role.
    pub role: Role,
    /// Joining date.
    pub joining_date: DateTime<Utc>,
    /// Linked login account, unique across employees when set.
    pub user_id: Option<UserId>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// An employee with its department and linked account resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeView {
    /// Employee ID.
    pub id: EmployeeId,
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Department ID.
    pub department_id: DepartmentId,
    /// Resolved department, absent if the reference dangles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentRef>,
    /// Role.
    pub role: Role,
    /// Joining date.
    pub joining_date: DateTime<Utc>,
    /// Linked user ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Resolved linked account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<PublicUser>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl EmployeeView {
    /// Assemble a view from an employee and its resolved references.
    pub fn assemble(
        employee: Employee,
        department: Option<DepartmentRef>,
        user: Option<PublicUser>,
    ) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            department_id: employee.department_id,
            department,
            role: employee.role,
            joining_date: employee.joining_date,
            user_id: employee.user_id,
            user,
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

/// Data required to create an employee.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    /// Trimmed name.
    pub name: String,
    /// Normalized email.
    pub email: String,
    /// Department.
    pub department_id: DepartmentId,
    /// Role.
    pub role: Role,
    /// Joining date.
    pub joining_date: DateTime<Utc>,
    /// Account to link, if any.
    pub user_id: Option<UserId>,
}

/// What an update does to the account link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkChange {
    /// Leave the link untouched.
    #[default]
    Keep,
    /// Remove the link.
    Clear,
    /// Link to the given account.
    Link(UserId),
}

impl LinkChange {
    /// Resolve the link value after applying this change to `current`.
    pub fn apply(self, current: Option<UserId>) -> Option<UserId> {
        match self {
            Self::Keep => current,
            Self::Clear => None,
            Self::Link(id) => Some(id),
        }
    }

    /// The account being newly linked, if any.
    pub fn target(&self) -> Option<UserId> {
        match self {
            Self::Link(id) => Some(*id),
            _ => None,
        }
    }
}

/// Partial update of an employee. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct EmployeeChanges {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New department.
    pub department_id: Option<DepartmentId>,
    /// New role.
    pub role: Option<Role>,
    /// New joining date.
    pub joining_date: Option<DateTime<Utc>>,
    /// Link change.
    pub user_link: LinkChange,
}

impl EmployeeChanges {
    /// Apply the changes to an existing record, stamping `updated_at`.
    pub fn apply_to(&self, employee: &mut Employee, now: DateTime<Utc>) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(email) = &self.email {
            employee.email = email.clone();
        }
        if let Some(department_id) = self.department_id {
            employee.department_id = department_id;
        }
        if let Some(role) = self.role {
            employee.role = role;
        }
        if let Some(joining_date) = self.joining_date {
            employee.joining_date = joining_date;
        }
        employee.user_id = self.user_link.apply(employee.user_id);
        employee.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        let now = Utc::now();
        Employee {
            id: EmployeeId::new(),
            name: "Ada Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            department_id: DepartmentId::new(),
            role: Role::Employee,
            joining_date: now,
            user_id: Some(UserId::new()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_link_change_tri_state() {
        let current = Some(UserId::new());
        let other = UserId::new();
        assert_eq!(LinkChange::Keep.apply(current), current);
        assert_eq!(LinkChange::Clear.apply(current), None);
        assert_eq!(LinkChange::Link(other).apply(current), Some(other));
    }

    #[test]
    fn test_apply_partial_changes() {
        let mut employee = sample();
        let linked = employee.user_id;
        let changes = EmployeeChanges {
            name: Some("Ada King".to_string()),
            ..Default::default()
        };
        changes.apply_to(&mut employee, Utc::now());
        assert_eq!(employee.name, "Ada King");
        assert_eq!(employee.email, "ada@x.com");
        assert_eq!(employee.user_id, linked);
    }

    #[test]
    fn test_view_omits_unset_references() {
        let mut employee = sample();
        employee.user_id = None;
        let view = EmployeeView::assemble(employee, None, None);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("user").is_none());
        assert!(json.get("user_id").is_none());
        assert!(json.get("department").is_none());
        assert_eq!(json["role"], "employee");
    }
}
