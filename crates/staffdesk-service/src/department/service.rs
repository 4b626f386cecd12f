//! Department CRUD.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use staffdesk_auth::gateway::Principal;
use staffdesk_core::error::AppError;
use staffdesk_core::types::DepartmentId;
use staffdesk_database::store::{DEPARTMENT_NOT_FOUND, DepartmentStore};
use staffdesk_entity::department::{
    Department, DepartmentChanges, NewDepartment, normalize_department_name,
};

use super::input::{CreateDepartmentInput, UpdateDepartmentInput};
use crate::validation::{rule, validation_failed};

/// Manages departments.
#[derive(Debug, Clone)]
pub struct DepartmentService {
    departments: Arc<dyn DepartmentStore>,
}

impl DepartmentService {
    /// Creates a new department service.
    pub fn new(departments: Arc<dyn DepartmentStore>) -> Self {
        Self { departments }
    }

    /// All departments ordered by name.
    pub async fn list(&self) -> Result<Vec<Department>, AppError> {
        self.departments.list().await
    }

    /// Create a department with a unique, trimmed name.
    pub async fn create(
        &self,
        actor: &Principal,
        input: CreateDepartmentInput,
    ) -> Result<Department, AppError> {
        input.validate().map_err(|e| validation_failed(&e))?;
        let name = rule(normalize_department_name(
            input.name.as_deref().unwrap_or_default(),
        ))?;

        let department = self.departments.create(&NewDepartment { name }).await?;
        info!(actor = %actor.id, department_id = %department.id, "Department created");
        Ok(department)
    }

    /// Rename a department. A malformed ID is treated as absent.
    pub async fn update(
        &self,
        actor: &Principal,
        id: &str,
        input: UpdateDepartmentInput,
    ) -> Result<Department, AppError> {
        let id = parse_id(id)?;
        input.validate().map_err(|e| validation_failed(&e))?;

        let changes = DepartmentChanges {
            name: input
                .name
                .as_deref()
                .map(normalize_department_name)
                .transpose()
                .map_err(AppError::validation)?,
        };

        let department = self.departments.update(id, &changes).await?;
        info!(actor = %actor.id, department_id = %department.id, "Department updated");
        Ok(department)
    }

    /// Delete a department that no employee references.
    pub async fn delete(&self, actor: &Principal, id: &str) -> Result<(), AppError> {
        let id = parse_id(id)?;
        self.departments.delete(id).await?;
        info!(actor = %actor.id, department_id = %id, "Department deleted");
        Ok(())
    }
}

fn parse_id(raw: &str) -> Result<DepartmentId, AppError> {
    DepartmentId::parse(raw).ok_or_else(|| AppError::not_found(DEPARTMENT_NOT_FOUND))
}
