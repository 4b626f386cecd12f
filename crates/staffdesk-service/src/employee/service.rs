//! Employee CRUD.

use std::sync::Arc;

use tracing::info;

use staffdesk_auth::gateway::Principal;
use staffdesk_core::error::AppError;
use staffdesk_core::types::EmployeeId;
use staffdesk_database::store::{EMPLOYEE_NOT_FOUND, EmployeeStore};
use staffdesk_entity::employee::EmployeeView;

use super::input::{CreateEmployeeInput, EmployeeQuery, UpdateEmployeeInput};

/// Manages employee records.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    employees: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(employees: Arc<dyn EmployeeStore>) -> Self {
        Self { employees }
    }

    /// Employees matching the query, ordered by name.
    pub async fn list(&self, query: EmployeeQuery) -> Result<Vec<EmployeeView>, AppError> {
        let filter = query.into_filter()?;
        self.employees.list(&filter).await
    }

    /// Create an employee. The store checks references and unique fields.
    pub async fn create(
        &self,
        actor: &Principal,
        input: CreateEmployeeInput,
    ) -> Result<EmployeeView, AppError> {
        let data = input.into_new()?;
        let employee = self.employees.create(&data).await?;
        info!(
            actor = %actor.id,
            employee_id = %employee.id,
            department_id = %employee.department_id,
            "Employee created"
        );
        Ok(employee)
    }

    /// Apply a partial update. A malformed ID is treated as absent.
    pub async fn update(
        &self,
        actor: &Principal,
        id: &str,
        input: UpdateEmployeeInput,
    ) -> Result<EmployeeView, AppError> {
        let id = parse_id(id)?;
        let changes = input.into_changes()?;
        let employee = self.employees.update(id, &changes).await?;
        info!(actor = %actor.id, employee_id = %employee.id, "Employee updated");
        Ok(employee)
    }

    /// Delete an employee.
    pub async fn delete(&self, actor: &Principal, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        self.employees.delete(id).await?;
        info!(actor = %actor.id, employee_id = %id, "Employee deleted");
        Ok(())
    }
}

fn parse_id(raw: &str) -> Result<EmployeeId, AppError> {
    EmployeeId::parse(raw).ok_or_else(|| AppError::not_found(EMPLOYEE_NOT_FOUND))
}
