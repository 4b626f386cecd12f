//! Employee repository implementation.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use staffdesk_core::error::AppError;
use staffdesk_core::result::AppResult;
use staffdesk_core::types::{EmployeeId, UserId};
use staffdesk_entity::department::DepartmentRef;
use staffdesk_entity::employee::{
    Employee, EmployeeChanges, EmployeeFilter, EmployeeView, LinkChange, NewEmployee,
};
use staffdesk_entity::user::{PublicUser, Role};

use super::{map_read_error, map_write_error};
use crate::store::{EMPLOYEE_NOT_FOUND, EmployeeStore};

const SELECT_VIEW: &str = "SELECT e.id, e.name, e.email, e.department_id, e.role, \
     e.joining_date, e.user_id, e.created_at, e.updated_at, \
     d.name AS department_name, u.email AS user_email, u.role AS user_role \
     FROM employees e \
     LEFT JOIN departments d ON d.id = e.department_id \
     LEFT JOIN users u ON u.id = e.user_id";

/// An employee row joined with its department and linked account.
#[derive(Debug, FromRow)]
struct EmployeeRow {
    #[sqlx(flatten)]
    employee: Employee,
    department_name: Option<String>,
    user_email: Option<String>,
    user_role: Option<Role>,
}

impl From<EmployeeRow> for EmployeeView {
    fn from(row: EmployeeRow) -> Self {
        let department = row.department_name.map(|name| DepartmentRef {
            id: row.employee.department_id,
            name,
        });
        let user = match (row.employee.user_id, row.user_email, row.user_role) {
            (Some(id), Some(email), Some(role)) => Some(PublicUser { id, email, role }),
            _ => None,
        };
        EmployeeView::assemble(row.employee, department, user)
    }
}

/// PostgreSQL-backed employee store.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_view(&self, id: EmployeeId) -> AppResult<Option<EmployeeView>> {
        let sql = format!("{SELECT_VIEW} WHERE e.id = $1");
        sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(EmployeeView::from))
            .map_err(|e| map_read_error(e, "Failed to find employee"))
    }
}

#[async_trait]
impl EmployeeStore for EmployeeRepository {
    async fn list(&self, filter: &EmployeeFilter) -> AppResult<Vec<EmployeeView>> {
        let window = filter.joining_window();
        let sql = format!(
            "{SELECT_VIEW} \
             WHERE ($1::text IS NULL OR e.name ILIKE $1 OR e.email ILIKE $1) \
               AND ($2::uuid IS NULL OR e.department_id = $2) \
               AND ($3::timestamptz IS NULL OR (e.joining_date >= $3 AND e.joining_date < $4)) \
             ORDER BY e.name COLLATE \"C\" ASC"
        );

        let rows = sqlx::query_as::<_, EmployeeRow>(&sql)
            .bind(filter.search_pattern())
            .bind(filter.department_id)
            .bind(window.map(|(start, _)| start))
            .bind(window.map(|(_, end)| end))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "Failed to list employees"))?;

        Ok(rows.into_iter().map(EmployeeView::from).collect())
    }

    async fn create(&self, data: &NewEmployee) -> AppResult<EmployeeView> {
        let id: EmployeeId = sqlx::query_scalar(
            "INSERT INTO employees (id, name, email, department_id, role, joining_date, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(EmployeeId::new())
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.department_id)
        .bind(data.role)
        .bind(data.joining_date)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create employee"))?;

        self.fetch_view(id)
            .await?
            .ok_or_else(|| AppError::internal("Created employee could not be read back"))
    }

    async fn update(&self, id: EmployeeId, changes: &EmployeeChanges) -> AppResult<EmployeeView> {
        let touch_link = !matches!(changes.user_link, LinkChange::Keep);

        let updated: Option<EmployeeId> = sqlx::query_scalar(
            "UPDATE employees SET \
                 name = COALESCE($2, name), \
                 email = COALESCE($3, email), \
                 department_id = COALESCE($4, department_id), \
                 role = COALESCE($5, role), \
                 joining_date = COALESCE($6, joining_date), \
                 user_id = CASE WHEN $7 THEN $8 ELSE user_id END, \
                 updated_at = NOW() \
             WHERE id = $1 RETURNING id",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.email)
        .bind(changes.department_id)
        .bind(changes.role)
        .bind(changes.joining_date)
        .bind(touch_link)
        .bind(changes.user_link.target())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update employee"))?;

        if updated.is_none() {
            return Err(AppError::not_found(EMPLOYEE_NOT_FOUND));
        }

        self.fetch_view(id)
            .await?
            .ok_or_else(|| AppError::not_found(EMPLOYEE_NOT_FOUND))
    }

    async fn delete(&self, id: EmployeeId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to delete employee"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(EMPLOYEE_NOT_FOUND));
        }
        Ok(())
    }

    async fn linked_user_ids(&self) -> AppResult<Vec<UserId>> {
        sqlx::query_scalar::<_, UserId>("SELECT user_id FROM employees WHERE user_id IS NOT NULL")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_read_error(e, "Failed to list linked users"))
    }
}
