//! Tenant data partitions
//!
//! Each organization owns one dynamically named, isolated data partition
//! whose lifetime exactly matches the organization record's. Partitions are
//! seeded with a single initialization marker at creation time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Initialization marker written into every freshly created partition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionMarker {
    pub initialized: bool,
    pub created_at: DateTime<Utc>,
    pub organization: String,
}

impl PartitionMarker {
    /// Create the marker for an organization's new partition
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            initialized: true,
            created_at: Utc::now(),
            organization: organization.into(),
        }
    }
}

/// Store managing the lifecycle of tenant data partitions
#[async_trait]
pub trait PartitionStore: Send + Sync + Debug {
    /// Create a partition and seed it with the initialization marker
    async fn create_partition(
        &self,
        name: &str,
        marker: PartitionMarker,
    ) -> Result<(), DomainError>;

    /// Drop a partition and everything in it
    async fn drop_partition(&self, name: &str) -> Result<(), DomainError>;

    /// Check whether a partition exists
    async fn partition_exists(&self, name: &str) -> Result<bool, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_is_initialized() {
        let marker = PartitionMarker::new("test_corp");

        assert!(marker.initialized);
        assert_eq!(marker.organization, "test_corp");
    }

    #[test]
    fn test_marker_serialization() {
        let marker = PartitionMarker::new("test_corp");
        let json = serde_json::to_value(&marker).unwrap();

        assert_eq!(json["initialized"], true);
        assert_eq!(json["organization"], "test_corp");
        assert!(json["created_at"].is_string());
    }
}
