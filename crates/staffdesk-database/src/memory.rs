//! In-memory store backing the `memory` provider and the test suites.
//!
//! All tables live behind one `RwLock`, so each mutation runs its
//! uniqueness and referential checks and its write under a single guard.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use staffdesk_core::error::AppError;
use staffdesk_core::result::AppResult;
use staffdesk_core::types::{DepartmentId, EmployeeId, UserId};
use staffdesk_entity::department::{Department, DepartmentChanges, DepartmentRef, NewDepartment};
use staffdesk_entity::employee::{
    Employee, EmployeeChanges, EmployeeFilter, EmployeeView, NewEmployee,
};
use staffdesk_entity::user::{NewUser, PublicUser, User};

use crate::store::{
    DEPARTMENT_IN_USE, DEPARTMENT_NOT_FOUND, DUPLICATE_DEPARTMENT_NAME, DUPLICATE_EMPLOYEE_EMAIL,
    DUPLICATE_USER_EMAIL, DUPLICATE_USER_LINK, DepartmentStore, EMPLOYEE_NOT_FOUND, EmployeeStore,
    UNKNOWN_DEPARTMENT, UNKNOWN_USER, UserStore,
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    departments: HashMap<DepartmentId, Department>,
    employees: HashMap<EmployeeId, Employee>,
}

impl Tables {
    fn view(&self, employee: &Employee) -> EmployeeView {
        let department = self
            .departments
            .get(&employee.department_id)
            .map(DepartmentRef::from);
        let user = employee
            .user_id
            .and_then(|id| self.users.get(&id))
            .map(PublicUser::from);
        EmployeeView::assemble(employee.clone(), department, user)
    }

    fn department_name_taken(&self, name: &str, except: Option<DepartmentId>) -> bool {
        self.departments
            .values()
            .any(|d| d.name == name && Some(d.id) != except)
    }

    /// Check a candidate employee row against every other row.
    fn check_employee(&self, candidate: &Employee) -> AppResult<()> {
        if !self.departments.contains_key(&candidate.department_id) {
            return Err(AppError::validation(UNKNOWN_DEPARTMENT));
        }
        if let Some(user_id) = candidate.user_id {
            if !self.users.contains_key(&user_id) {
                return Err(AppError::validation(UNKNOWN_USER));
            }
        }

        let others = self.employees.values().filter(|e| e.id != candidate.id);
        for other in others {
            if other.email == candidate.email {
                return Err(AppError::conflict("email", DUPLICATE_EMPLOYEE_EMAIL));
            }
            if candidate.user_id.is_some() && other.user_id == candidate.user_id {
                return Err(AppError::conflict("user_id", DUPLICATE_USER_LINK));
            }
        }
        Ok(())
    }
}

/// Store keeping every table in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.values().find(|u| u.email == email).cloned())
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == data.email) {
            return Err(AppError::conflict("email", DUPLICATE_USER_EMAIL));
        }

        let user = User {
            id: UserId::new(),
            email: data.email.clone(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            created_at: Utc::now(),
        };
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let tables = self.tables.read().await;
        let mut users: Vec<User> = tables.users.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }
}

#[async_trait]
impl DepartmentStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Department>> {
        let tables = self.tables.read().await;
        let mut departments: Vec<Department> = tables.departments.values().cloned().collect();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    async fn create(&self, data: &NewDepartment) -> AppResult<Department> {
        let mut tables = self.tables.write().await;
        if tables.department_name_taken(&data.name, None) {
            return Err(AppError::conflict("name", DUPLICATE_DEPARTMENT_NAME));
        }

        let now = Utc::now();
        let department = Department {
            id: DepartmentId::new(),
            name: data.name.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.departments.insert(department.id, department.clone());
        Ok(department)
    }

    async fn update(&self, id: DepartmentId, changes: &DepartmentChanges) -> AppResult<Department> {
        let mut tables = self.tables.write().await;
        if !tables.departments.contains_key(&id) {
            return Err(AppError::not_found(DEPARTMENT_NOT_FOUND));
        }
        if let Some(name) = &changes.name {
            if tables.department_name_taken(name, Some(id)) {
                return Err(AppError::conflict("name", DUPLICATE_DEPARTMENT_NAME));
            }
        }

        let department = tables
            .departments
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(DEPARTMENT_NOT_FOUND))?;
        if let Some(name) = &changes.name {
            department.name = name.clone();
        }
        department.updated_at = Utc::now();
        Ok(department.clone())
    }

    async fn delete(&self, id: DepartmentId) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        if !tables.departments.contains_key(&id) {
            return Err(AppError::not_found(DEPARTMENT_NOT_FOUND));
        }
        if tables.employees.values().any(|e| e.department_id == id) {
            return Err(AppError::conflict("department_id", DEPARTMENT_IN_USE));
        }
        tables.departments.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn list(&self, filter: &EmployeeFilter) -> AppResult<Vec<EmployeeView>> {
        let tables = self.tables.read().await;
        let mut views: Vec<EmployeeView> = tables
            .employees
            .values()
            .filter(|e| filter.matches(e))
            .map(|e| tables.view(e))
            .collect();
        views.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(views)
    }

    async fn create(&self, data: &NewEmployee) -> AppResult<EmployeeView> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let employee = Employee {
            id: EmployeeId::new(),
            name: data.name.clone(),
            email: data.email.clone(),
            department_id: data.department_id,
            role: data.role,
            joining_date: data.joining_date,
            user_id: data.user_id,
            created_at: now,
            updated_at: now,
        };
        tables.check_employee(&employee)?;

        let view = tables.view(&employee);
        tables.employees.insert(employee.id, employee);
        Ok(view)
    }

    async fn update(&self, id: EmployeeId, changes: &EmployeeChanges) -> AppResult<EmployeeView> {
        let mut tables = self.tables.write().await;
        let mut employee = tables
            .employees
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(EMPLOYEE_NOT_FOUND))?;

        changes.apply_to(&mut employee, Utc::now());
        tables.check_employee(&employee)?;

        let view = tables.view(&employee);
        tables.employees.insert(id, employee);
        Ok(view)
    }

    async fn delete(&self, id: EmployeeId) -> AppResult<()> {
        let mut tables = self.tables.write().await;
        tables
            .employees
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(EMPLOYEE_NOT_FOUND))
    }

    async fn linked_user_ids(&self) -> AppResult<Vec<UserId>> {
        let tables = self.tables.read().await;
        Ok(tables.employees.values().filter_map(|e| e.user_id).collect())
    }
}
