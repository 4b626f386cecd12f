//! Field rules for employee records.
//!
//! Each helper returns the client-facing message for its field so callers
//! can collect every violation into a single validation failure.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use validator::ValidateEmail;

use staffdesk_core::types::{DepartmentId, UserId};

use crate::user::normalize_email;

/// Trim a name and check it is letters and whitespace only.
pub fn validate_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Employee name is required.");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Err("Name must contain only alphabetic characters and spaces.");
    }
    Ok(name.to_string())
}

/// Normalize and check an email address.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = normalize_email(raw);
    if email.is_empty() {
        return Err("Email is required.");
    }
    if !email.validate_email() {
        return Err("Please fill a valid email address");
    }
    Ok(email)
}

/// Parse a required department reference.
pub fn parse_department_id(raw: &str) -> Result<DepartmentId, &'static str> {
    if raw.trim().is_empty() {
        return Err("Department ID is required.");
    }
    DepartmentId::parse(raw).ok_or("Department ID is not a valid identifier.")
}

/// Parse an optional account reference; blank means no link.
pub fn parse_user_link(raw: &str) -> Result<Option<UserId>, &'static str> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    UserId::parse(raw)
        .map(Some)
        .ok_or("Linked user ID is not a valid identifier.")
}

/// Parse a joining date given as `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// A blank value yields `None`.
pub fn parse_joining_date(raw: &str) -> Result<Option<DateTime<Utc>>, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(Some(date.and_time(NaiveTime::MIN).and_utc()));
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| Some(dt.with_timezone(&Utc)))
        .map_err(|_| "Joining date must be a date (YYYY-MM-DD).")
}

/// Parse a joining-date filter down to its UTC calendar day.
pub fn parse_filter_date(raw: &str) -> Result<Option<NaiveDate>, &'static str> {
    parse_joining_date(raw).map(|dt| dt.map(|dt| dt.date_naive()))
}
