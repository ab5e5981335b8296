//! PostgreSQL partition store implementation

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::partition::{PartitionMarker, PartitionStore};
use crate::domain::DomainError;

/// PostgreSQL implementation of PartitionStore
///
/// Each tenant partition is a dedicated table named by the organization's
/// derived `collection_name`, holding JSONB documents. The name is always a
/// product of `sanitize_collection_name`, restricted to `[a-z0-9_]` with the
/// `org_` prefix, so interpolating it into DDL is safe; `validate_name`
/// rejects anything else before it reaches a query.
#[derive(Debug, Clone)]
pub struct PostgresPartitionStore {
    pool: PgPool,
}

impl PostgresPartitionStore {
    /// Create a new store with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        let well_formed = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if well_formed {
            Ok(())
        } else {
            Err(DomainError::storage(format!(
                "Invalid partition name '{}'",
                name
            )))
        }
    }
}

#[async_trait]
impl PartitionStore for PostgresPartitionStore {
    async fn create_partition(
        &self,
        name: &str,
        marker: PartitionMarker,
    ) -> Result<(), DomainError> {
        Self::validate_name(name)?;

        let ddl = format!(
            r#"
            CREATE TABLE {} (
                id BIGSERIAL PRIMARY KEY,
                document JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            name
        );

        sqlx::query(&ddl).execute(&self.pool).await.map_err(|e| {
            let msg = e.to_string();

            if msg.contains("already exists") {
                DomainError::conflict(format!("Partition '{}' already exists", name))
            } else {
                DomainError::storage(format!("Failed to create partition '{}': {}", name, e))
            }
        })?;

        let marker_doc = serde_json::to_value(&marker)
            .map_err(|e| DomainError::storage(format!("Failed to serialize marker: {}", e)))?;

        let insert = format!("INSERT INTO {} (document) VALUES ($1)", name);

        sqlx::query(&insert)
            .bind(&marker_doc)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!("Failed to seed partition '{}': {}", name, e))
            })?;

        Ok(())
    }

    async fn drop_partition(&self, name: &str) -> Result<(), DomainError> {
        Self::validate_name(name)?;

        let ddl = format!("DROP TABLE IF EXISTS {}", name);

        sqlx::query(&ddl).execute(&self.pool).await.map_err(|e| {
            DomainError::storage(format!("Failed to drop partition '{}': {}", name, e))
        })?;

        Ok(())
    }

    async fn partition_exists(&self, name: &str) -> Result<bool, DomainError> {
        Self::validate_name(name)?;

        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables WHERE table_name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to check partition: {}", e)))?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_accepts_sanitized() {
        assert!(PostgresPartitionStore::validate_name("org_test_corp_").is_ok());
        assert!(PostgresPartitionStore::validate_name("org_corp123").is_ok());
    }

    #[test]
    fn test_validate_name_rejects_unsafe() {
        assert!(PostgresPartitionStore::validate_name("").is_err());
        assert!(PostgresPartitionStore::validate_name("org_x; DROP TABLE admins").is_err());
        assert!(PostgresPartitionStore::validate_name("Org_Upper").is_err());
        assert!(PostgresPartitionStore::validate_name("org x").is_err());
    }
}
