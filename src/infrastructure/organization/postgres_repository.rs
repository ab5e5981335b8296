//! PostgreSQL organization repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::organization::{Organization, OrganizationRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of OrganizationRepository
///
/// Records live in the `organizations` table; the UNIQUE constraint on
/// `organization_name` is the storage-layer backstop against the
/// duplicate-create race between concurrent callers.
#[derive(Debug, Clone)]
pub struct PostgresOrganizationRepository {
    pool: PgPool,
}

impl PostgresOrganizationRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ensure the organizations table exists
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS organizations (
                id VARCHAR(64) PRIMARY KEY,
                organization_name VARCHAR(50) NOT NULL UNIQUE,
                collection_name VARCHAR(64) NOT NULL,
                admin_id VARCHAR(64) NOT NULL,
                admin_email VARCHAR(254) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create organizations table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl OrganizationRepository for PostgresOrganizationRepository {
    async fn get_by_name(&self, name: &str) -> Result<Option<Organization>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, organization_name, collection_name, admin_id, admin_email, created_at
            FROM organizations
            WHERE organization_name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get organization: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_organization(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, organization: Organization) -> Result<Organization, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO organizations (id, organization_name, collection_name,
                                       admin_id, admin_email, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(organization.id())
        .bind(organization.organization_name())
        .bind(organization.collection_name())
        .bind(organization.admin_id())
        .bind(organization.admin_email())
        .bind(organization.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "Organization '{}' already exists",
                    organization.organization_name()
                ))
            } else {
                DomainError::storage(format!("Failed to create organization: {}", e))
            }
        })?;

        Ok(organization)
    }

    async fn update(&self, organization: &Organization) -> Result<Organization, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE organizations
            SET collection_name = $2, admin_id = $3, admin_email = $4
            WHERE organization_name = $1
            "#,
        )
        .bind(organization.organization_name())
        .bind(organization.collection_name())
        .bind(organization.admin_id())
        .bind(organization.admin_email())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update organization: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Organization '{}' not found",
                organization.organization_name()
            )));
        }

        Ok(organization.clone())
    }

    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM organizations WHERE organization_name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete organization: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<Organization>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, organization_name, collection_name, admin_id, admin_email, created_at
            FROM organizations
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list organizations: {}", e)))?;

        rows.iter().map(row_to_organization).collect()
    }
}

fn row_to_organization(row: &sqlx::postgres::PgRow) -> Result<Organization, DomainError> {
    let value = serde_json::json!({
        "id": row.get::<String, _>("id"),
        "organization_name": row.get::<String, _>("organization_name"),
        "collection_name": row.get::<String, _>("collection_name"),
        "admin_id": row.get::<String, _>("admin_id"),
        "admin_email": row.get::<String, _>("admin_email"),
        "created_at": row.get::<chrono::DateTime<chrono::Utc>, _>("created_at"),
    });

    serde_json::from_value(value)
        .map_err(|e| DomainError::storage(format!("Failed to deserialize organization: {}", e)))
}
