//! Department repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use staffdesk_core::error::AppError;
use staffdesk_core::result::AppResult;
use staffdesk_core::types::DepartmentId;
use staffdesk_entity::department::{Department, DepartmentChanges, NewDepartment};

use super::{map_read_error, map_write_error, violated_constraint};
use crate::store::{DEPARTMENT_IN_USE, DEPARTMENT_NOT_FOUND, DepartmentStore};

/// PostgreSQL-backed department store.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    /// Create a new department repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentStore for DepartmentRepository {
    async fn list(&self) -> AppResult<Vec<Department>> {
        sqlx::query_as::<_, Department>(r#"SELECT * FROM departments ORDER BY name COLLATE "C" ASC"#)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "Failed to list departments"))
    }

    async fn create(&self, data: &NewDepartment) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(DepartmentId::new())
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create department"))
    }

    async fn update(&self, id: DepartmentId, changes: &DepartmentChanges) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "UPDATE departments SET name = COALESCE($2, name), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&changes.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update department"))?
        .ok_or_else(|| AppError::not_found(DEPARTMENT_NOT_FOUND))
    }

    async fn delete(&self, id: DepartmentId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if violated_constraint(&e) == Some("employees_department_id_fkey") {
                    AppError::conflict("department_id", DEPARTMENT_IN_USE)
                } else {
                    map_write_error(e, "Failed to delete department")
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(DEPARTMENT_NOT_FOUND));
        }
        Ok(())
    }
}
