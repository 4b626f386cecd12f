//! Store bundle that dispatches to the configured provider.

use std::sync::Arc;

use tracing::info;

use staffdesk_core::config::{DatabaseConfig, StoreProvider};
use staffdesk_core::result::AppResult;

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{DepartmentRepository, EmployeeRepository, UserRepository};
use crate::store::{DepartmentStore, EmployeeStore, UserStore};

#[derive(Debug, Clone)]
enum Backend {
    Postgres(DatabasePool),
    Memory,
}

/// The Credential Store and Directory Store, selected at construction time.
#[derive(Debug, Clone)]
pub struct Stores {
    /// Login accounts.
    pub users: Arc<dyn UserStore>,
    /// Departments.
    pub departments: Arc<dyn DepartmentStore>,
    /// Employees.
    pub employees: Arc<dyn EmployeeStore>,
    backend: Backend,
}

impl Stores {
    /// Build the stores named by `config.provider`, connecting and
    /// migrating PostgreSQL when selected.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                let db = DatabasePool::connect(config).await?;
                if config.auto_migrate {
                    run_migrations(db.pool()).await?;
                }
                Ok(Self::postgres(db))
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory store");
                Ok(Self::memory(MemoryStore::new()))
            }
        }
    }

    /// PostgreSQL repositories over an open pool.
    pub fn postgres(db: DatabasePool) -> Self {
        let pool = db.pool().clone();
        Self {
            users: Arc::new(UserRepository::new(pool.clone())),
            departments: Arc::new(DepartmentRepository::new(pool.clone())),
            employees: Arc::new(EmployeeRepository::new(pool)),
            backend: Backend::Postgres(db),
        }
    }

    /// Every store backed by one shared in-memory store.
    pub fn memory(store: MemoryStore) -> Self {
        Self {
            users: Arc::new(store.clone()),
            departments: Arc::new(store.clone()),
            employees: Arc::new(store),
            backend: Backend::Memory,
        }
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.backend {
            Backend::Postgres(db) => db.health_check().await,
            Backend::Memory => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Backend::Postgres(db) = &self.backend {
            db.close().await;
        }
    }
}
