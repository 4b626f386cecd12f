//! Request bodies and query parameters for employee operations.

use std::borrow::Cow;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use staffdesk_core::error::AppError;
use staffdesk_entity::employee::validation as rules;
use staffdesk_entity::employee::{EmployeeChanges, EmployeeFilter, LinkChange, NewEmployee};
use staffdesk_entity::user::Role;

use crate::validation::{parse_role, rule, validation_failed};

/// Body for creating an employee.
///
/// `user_id` may be omitted, `null`, or `""` for an unlinked employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeInput {
    /// Full name.
    #[validate(
        required(message = "Employee name is required."),
        custom(function = "crate::validation::check_name")
    )]
    pub name: Option<String>,
    /// Email.
    #[validate(
        required(message = "Email is required."),
        custom(function = "crate::validation::check_email")
    )]
    pub email: Option<String>,
    /// Department ID.
    #[validate(
        required(message = "Department ID is required."),
        custom(function = "crate::validation::check_department_id")
    )]
    pub department_id: Option<String>,
    /// Role, defaulting to `employee`.
    #[validate(custom(function = "crate::validation::check_role"))]
    pub role: Option<String>,
    /// Joining date, defaulting to now.
    #[validate(custom(function = "crate::validation::check_joining_date"))]
    pub joining_date: Option<String>,
    /// Account to link.
    #[validate(custom(function = "crate::validation::check_user_link"))]
    pub user_id: Option<String>,
}

impl CreateEmployeeInput {
    /// Validate every field and build the insert.
    pub fn into_new(self) -> Result<NewEmployee, AppError> {
        self.validate().map_err(|e| validation_failed(&e))?;

        let joining_date = rule(rules::parse_joining_date(
            self.joining_date.as_deref().unwrap_or_default(),
        ))?;

        Ok(NewEmployee {
            name: rule(rules::validate_name(self.name.as_deref().unwrap_or_default()))?,
            email: rule(rules::validate_email(
                self.email.as_deref().unwrap_or_default(),
            ))?,
            department_id: rule(rules::parse_department_id(
                self.department_id.as_deref().unwrap_or_default(),
            ))?,
            role: rule(parse_role(self.role.as_deref().unwrap_or_default()))?
                .unwrap_or(Role::Employee),
            joining_date: joining_date.unwrap_or_else(Utc::now),
            user_id: rule(rules::parse_user_link(
                self.user_id.as_deref().unwrap_or_default(),
            ))?,
        })
    }
}

/// Body for a partial employee update.
///
/// `user_id` is tri-state: omitted keeps the link, `null` or `""` clears it,
/// and an ID sets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "check_link", skip_on_field_errors = false))]
pub struct UpdateEmployeeInput {
    /// New name.
    #[validate(custom(function = "crate::validation::check_name"))]
    pub name: Option<String>,
    /// New email.
    #[validate(custom(function = "crate::validation::check_email"))]
    pub email: Option<String>,
    /// New department.
    #[validate(custom(function = "crate::validation::check_department_id"))]
    pub department_id: Option<String>,
    /// New role.
    #[validate(custom(function = "crate::validation::check_role"))]
    pub role: Option<String>,
    /// New joining date.
    #[validate(custom(function = "crate::validation::check_joining_date"))]
    pub joining_date: Option<String>,
    /// Link change.
    #[serde(
        default,
        deserialize_with = "crate::validation::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_id: Option<Option<String>>,
}

fn check_link(input: &UpdateEmployeeInput) -> Result<(), ValidationError> {
    match input.user_id.as_ref().and_then(|v| v.as_deref()) {
        Some(raw) => rules::parse_user_link(raw)
            .map(|_| ())
            .map_err(|m| ValidationError::new("user_id").with_message(Cow::Borrowed(m))),
        None => Ok(()),
    }
}

impl UpdateEmployeeInput {
    /// Validate every supplied field and build the change set.
    pub fn into_changes(self) -> Result<EmployeeChanges, AppError> {
        self.validate().map_err(|e| validation_failed(&e))?;

        let user_link = match self.user_id {
            None => LinkChange::Keep,
            Some(None) => LinkChange::Clear,
            Some(Some(raw)) => match rule(rules::parse_user_link(&raw))? {
                Some(id) => LinkChange::Link(id),
                None => LinkChange::Clear,
            },
        };

        Ok(EmployeeChanges {
            name: self
                .name
                .as_deref()
                .map(rules::validate_name)
                .transpose()
                .map_err(AppError::validation)?,
            email: self
                .email
                .as_deref()
                .map(rules::validate_email)
                .transpose()
                .map_err(AppError::validation)?,
            department_id: self
                .department_id
                .as_deref()
                .map(rules::parse_department_id)
                .transpose()
                .map_err(AppError::validation)?,
            role: rule(parse_role(self.role.as_deref().unwrap_or_default()))?,
            joining_date: rule(rules::parse_joining_date(
                self.joining_date.as_deref().unwrap_or_default(),
            ))?,
            user_link,
        })
    }
}

/// Query string for the employee listing. Blank values are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EmployeeQuery {
    /// Substring of name or email.
    pub search: Option<String>,
    /// Department filter.
    #[validate(custom(function = "crate::validation::check_optional_department_id"))]
    pub department_id: Option<String>,
    /// Joining day filter.
    #[validate(custom(function = "crate::validation::check_joining_date"))]
    pub joining_date: Option<String>,
}

impl EmployeeQuery {
    /// Validate and build the filter.
    pub fn into_filter(self) -> Result<EmployeeFilter, AppError> {
        self.validate().map_err(|e| validation_failed(&e))?;

        let department_id = match self.department_id.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(rule(rules::parse_department_id(raw))?),
            _ => None,
        };

        Ok(EmployeeFilter {
            search: self
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            department_id,
            joining_date: rule(rules::parse_filter_date(
                self.joining_date.as_deref().unwrap_or_default(),
            ))?,
        })
    }
}
