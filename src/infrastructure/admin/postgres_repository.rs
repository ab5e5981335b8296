//! PostgreSQL admin repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::admin::{Admin, AdminRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of AdminRepository
///
/// The UNIQUE constraint on `email` enforces credential-identity uniqueness
/// at the storage layer.
#[derive(Debug, Clone)]
pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ensure the admins table exists
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS admins (
                id VARCHAR(64) PRIMARY KEY,
                email VARCHAR(254) NOT NULL UNIQUE,
                password_hash TEXT NOT NULL,
                organization_name VARCHAR(50) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create admins table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn get_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash, organization_name, created_at
            FROM admins
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get admin: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_admin(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, admin: Admin) -> Result<Admin, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO admins (id, email, password_hash, organization_name, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(admin.id())
        .bind(admin.email())
        .bind(admin.password_hash())
        .bind(admin.organization_name())
        .bind(admin.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "Admin email '{}' already registered",
                    admin.email()
                ))
            } else {
                DomainError::storage(format!("Failed to create admin: {}", e))
            }
        })?;

        Ok(admin)
    }

    async fn update(&self, admin: &Admin) -> Result<Admin, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE admins
            SET email = $2, password_hash = $3, organization_name = $4
            WHERE id = $1
            "#,
        )
        .bind(admin.id())
        .bind(admin.email())
        .bind(admin.password_hash())
        .bind(admin.organization_name())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "Admin email '{}' already registered",
                    admin.email()
                ))
            } else {
                DomainError::storage(format!("Failed to update admin: {}", e))
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Admin '{}' not found",
                admin.email()
            )));
        }

        Ok(admin.clone())
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM admins WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete admin: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_admin(row: &sqlx::postgres::PgRow) -> Result<Admin, DomainError> {
    let value = serde_json::json!({
        "id": row.get::<String, _>("id"),
        "email": row.get::<String, _>("email"),
        "password_hash": row.get::<String, _>("password_hash"),
        "organization_name": row.get::<String, _>("organization_name"),
        "created_at": row.get::<chrono::DateTime<chrono::Utc>, _>("created_at"),
    });

    serde_json::from_value(value)
        .map_err(|e| DomainError::storage(format!("Failed to deserialize admin: {}", e)))
}
