//! Glue between `validator` derives and the domain field rules.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};
use validator::{ValidationError, ValidationErrors};

use staffdesk_core::error::AppError;
use staffdesk_entity::employee::validation as rules;
use staffdesk_entity::user::Role;

/// Flatten derive errors into one message per violation, ordered by field.
pub fn messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(_, errs)| errs.iter())
        .map(|e| match &e.message {
            Some(message) => message.to_string(),
            None => e.code.to_string(),
        })
        .collect()
}

/// Convert derive errors into a `ValidationFailed` error.
pub fn validation_failed(errors: &ValidationErrors) -> AppError {
    AppError::validation_failed(messages(errors))
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

pub(crate) fn check_name(value: &str) -> Result<(), ValidationError> {
    rules::validate_name(value)
        .map(|_| ())
        .map_err(|m| rule_error("name", m))
}

pub(crate) fn check_email(value: &str) -> Result<(), ValidationError> {
    rules::validate_email(value)
        .map(|_| ())
        .map_err(|m| rule_error("email", m))
}

pub(crate) fn check_department_id(value: &str) -> Result<(), ValidationError> {
    rules::parse_department_id(value)
        .map(|_| ())
        .map_err(|m| rule_error("department_id", m))
}

/// A blank filter value is ignored.
pub(crate) fn check_optional_department_id(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    check_department_id(value)
}

pub(crate) fn check_user_link(value: &str) -> Result<(), ValidationError> {
    rules::parse_user_link(value)
        .map(|_| ())
        .map_err(|m| rule_error("user_id", m))
}

pub(crate) fn check_role(value: &str) -> Result<(), ValidationError> {
    parse_role(value)
        .map(|_| ())
        .map_err(|m| rule_error("role", m))
}

pub(crate) fn check_joining_date(value: &str) -> Result<(), ValidationError> {
    rules::parse_joining_date(value)
        .map(|_| ())
        .map_err(|m| rule_error("joining_date", m))
}

pub(crate) fn check_department_name(value: &str) -> Result<(), ValidationError> {
    staffdesk_entity::department::normalize_department_name(value)
        .map(|_| ())
        .map_err(|m| rule_error("name", m))
}

/// Parse an optional role; blank means "not given".
pub(crate) fn parse_role(value: &str) -> Result<Option<Role>, &'static str> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    value
        .parse::<Role>()
        .map(Some)
        .map_err(|_| "Role must be one of: employee, HR, admin.")
}

/// Lift a rule failure into a single-message validation error.
pub(crate) fn rule<T>(result: Result<T, &'static str>) -> Result<T, AppError> {
    result.map_err(AppError::validation)
}

/// Deserialize a field so that an explicit `null` is distinguishable from
/// an absent one: absent stays `None` (via `#[serde(default)]`), `null`
/// becomes `Some(None)`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
