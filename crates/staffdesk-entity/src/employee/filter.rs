//! Query filters for the employee listing.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use staffdesk_core::types::DepartmentId;

use super::model::Employee;

/// Filters for listing employees, composed by AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Case-insensitive literal substring of name or email.
    pub search: Option<String>,
    /// Exact department.
    pub department_id: Option<DepartmentId>,
    /// Joining day (UTC).
    pub joining_date: Option<NaiveDate>,
}

impl EmployeeFilter {
    /// The half-open `[start, end)` range covering the joining day.
    pub fn joining_window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let day = self.joining_date?;
        let start = day.and_time(NaiveTime::MIN).and_utc();
        let end = day
            .checked_add_days(Days::new(1))?
            .and_time(NaiveTime::MIN)
            .and_utc();
        Some((start, end))
    }

    /// An `ILIKE` pattern for the search term with `%`, `_` and `\` escaped.
    pub fn search_pattern(&self) -> Option<String> {
        let term = self.search.as_deref()?;
        let mut escaped = String::with_capacity(term.len() + 2);
        escaped.push('%');
        for c in term.chars() {
            if matches!(c, '%' | '_' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped.push('%');
        Some(escaped)
    }

    /// Evaluate the filter against a record in memory.
    pub fn matches(&self, employee: &Employee) -> bool {
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !employee.name.to_lowercase().contains(&term)
                && !employee.email.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        if let Some(department_id) = self.department_id {
            if employee.department_id != department_id {
                return false;
            }
        }
        if let Some((start, end)) = self.joining_window() {
            if employee.joining_date < start || employee.joining_date >= end {
                return false;
            }
        }
        true
    }
}
