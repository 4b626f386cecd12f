//! Accounts not yet linked to any employee record.

use std::collections::HashSet;
use std::sync::Arc;

use staffdesk_core::error::AppError;
use staffdesk_database::store::{EmployeeStore, UserStore};
use staffdesk_entity::user::PublicUser;

/// Computes the set of unlinked accounts on demand.
#[derive(Debug, Clone)]
pub struct LinkResolver {
    users: Arc<dyn UserStore>,
    employees: Arc<dyn EmployeeStore>,
}

impl LinkResolver {
    /// Creates a new resolver.
    pub fn new(users: Arc<dyn UserStore>, employees: Arc<dyn EmployeeStore>) -> Self {
        Self { users, employees }
    }

    /// All accounts minus those referenced by an employee, ordered by email.
    pub async fn list_unlinked(&self) -> Result<Vec<PublicUser>, AppError> {
        let linked: HashSet<_> = self.employees.linked_user_ids().await?.into_iter().collect();
        let users = self.users.list().await?;

        Ok(users
            .into_iter()
            .filter(|user| !linked.contains(&user.id))
            .map(PublicUser::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use staffdesk_database::MemoryStore;
    use staffdesk_database::store::DepartmentStore;
    use staffdesk_entity::department::NewDepartment;
    use staffdesk_entity::employee::{EmployeeChanges, LinkChange, NewEmployee};
    use staffdesk_entity::user::{NewUser, Role};

    #[tokio::test]
    async fn test_linking_removes_and_unlinking_restores() {
        let store = MemoryStore::new();
        let resolver = LinkResolver::new(Arc::new(store.clone()), Arc::new(store.clone()));

        let mut users = Vec::new();
        for email in ["b@x.com", "a@x.com"] {
            users.push(
                UserStore::create(
                    &store,
                    &NewUser {
                        email: email.to_string(),
                        password_hash: "hash".to_string(),
                        role: Role::Employee,
                    },
                )
                .await
                .unwrap(),
            );
        }
        let emails: Vec<String> = resolver
            .list_unlinked()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.email)
            .collect();
        assert_eq!(emails, vec!["a@x.com", "b@x.com"]);

        let dept = DepartmentStore::create(
            &store,
            &NewDepartment {
                name: "Ops".to_string(),
            },
        )
        .await
        .unwrap();
        let linked = users[0].id;
        let employee = EmployeeStore::create(
            &store,
            &NewEmployee {
                name: "Bea".to_string(),
                email: "bea@x.com".to_string(),
                department_id: dept.id,
                role: Role::Employee,
                joining_date: Utc::now(),
                user_id: Some(linked),
            },
        )
        .await
        .unwrap();

        let unlinked = resolver.list_unlinked().await.unwrap();
        assert!(unlinked.iter().all(|u| u.id != linked));
        assert_eq!(unlinked.len(), 1);

        EmployeeStore::update(
            &store,
            employee.id,
            &EmployeeChanges {
                user_link: LinkChange::Clear,
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(resolver.list_unlinked().await.unwrap().len(), 2);
    }
}
