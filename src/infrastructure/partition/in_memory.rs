//! In-memory partition store implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::partition::{PartitionMarker, PartitionStore};
use crate::domain::DomainError;

/// In-memory implementation of PartitionStore
///
/// Each partition is a named document list seeded with its initialization
/// marker. Useful for development and tests.
#[derive(Debug, Default)]
pub struct InMemoryPartitionStore {
    partitions: Arc<RwLock<HashMap<String, Vec<serde_json::Value>>>>,
}

impl InMemoryPartitionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents currently held in a partition, for test inspection
    #[cfg(test)]
    pub async fn documents(&self, name: &str) -> Option<Vec<serde_json::Value>> {
        let partitions = self.partitions.read().await;
        partitions.get(name).cloned()
    }
}

#[async_trait]
impl PartitionStore for InMemoryPartitionStore {
    async fn create_partition(
        &self,
        name: &str,
        marker: PartitionMarker,
    ) -> Result<(), DomainError> {
        let mut partitions = self.partitions.write().await;

        if partitions.contains_key(name) {
            return Err(DomainError::conflict(format!(
                "Partition '{}' already exists",
                name
            )));
        }

        let marker_doc = serde_json::to_value(&marker)
            .map_err(|e| DomainError::storage(format!("Failed to serialize marker: {}", e)))?;

        partitions.insert(name.to_string(), vec![marker_doc]);
        Ok(())
    }

    async fn drop_partition(&self, name: &str) -> Result<(), DomainError> {
        let mut partitions = self.partitions.write().await;
        partitions.remove(name);
        Ok(())
    }

    async fn partition_exists(&self, name: &str) -> Result<bool, DomainError> {
        let partitions = self.partitions.read().await;
        Ok(partitions.contains_key(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_seeds_marker() {
        let store = InMemoryPartitionStore::new();

        store
            .create_partition("org_test_corp", PartitionMarker::new("test_corp"))
            .await
            .unwrap();

        assert!(store.partition_exists("org_test_corp").await.unwrap());

        let docs = store.documents("org_test_corp").await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["initialized"], true);
        assert_eq!(docs[0]["organization"], "test_corp");
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let store = InMemoryPartitionStore::new();

        store
            .create_partition("org_test_corp", PartitionMarker::new("test_corp"))
            .await
            .unwrap();

        let result = store
            .create_partition("org_test_corp", PartitionMarker::new("test_corp"))
            .await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_drop_partition() {
        let store = InMemoryPartitionStore::new();

        store
            .create_partition("org_test_corp", PartitionMarker::new("test_corp"))
            .await
            .unwrap();

        store.drop_partition("org_test_corp").await.unwrap();
        assert!(!store.partition_exists("org_test_corp").await.unwrap());

        // Dropping a missing partition is not an error
        store.drop_partition("org_test_corp").await.unwrap();
    }
}
