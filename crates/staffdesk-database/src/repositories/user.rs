//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use staffdesk_core::result::AppResult;
use staffdesk_core::types::UserId;
use staffdesk_entity::user::{NewUser, User};

use super::{map_read_error, map_write_error};
use crate::store::UserStore;

/// PostgreSQL-backed Credential Store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "Failed to find user by id"))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "Failed to find user by email"))
    }

    async fn create(&self, data: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, email, password_hash, role, created_at",
        )
        .bind(UserId::new())
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create user"))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, role, created_at FROM users ORDER BY email COLLATE \"C\" ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error(e, "Failed to list users"))
    }
}
