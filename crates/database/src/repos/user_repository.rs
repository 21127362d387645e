//! User repository for database operations.

use crate::entities::{NewUser, User};
use crate::types::{UserError, UserResult};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create new user
    pub async fn create(&self, new_user: &NewUser) -> UserResult<User> {
        let id = cuid2::create_id();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO users (id, name, email, password_hash, location, created_at) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.location)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") && e.to_string().contains("email") {
                UserError::EmailAlreadyExists
            } else {
                UserError::DatabaseError(e.to_string())
            }
        })?;

        Ok(User {
            id,
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            location: new_user.location.clone(),
            created_at: now,
        })
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, location, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| row_to_user(&row)))
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, name, email, password_hash, location, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(row.map(|row| row_to_user(&row)))
    }

    /// Check if email exists
    pub async fn email_exists(&self, email: &str) -> UserResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }
}

fn row_to_user(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        location: row.get("location"),
        created_at: row.get("created_at"),
    }
}
