//! In-memory organization repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::organization::{Organization, OrganizationRepository};
use crate::domain::DomainError;

/// In-memory implementation of OrganizationRepository
///
/// Keyed by organization name, the primary business key. Useful for
/// development and tests; data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryOrganizationRepository {
    organizations: Arc<RwLock<HashMap<String, Organization>>>,
}

impl InMemoryOrganizationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizationRepository {
    async fn get_by_name(&self, name: &str) -> Result<Option<Organization>, DomainError> {
        let organizations = self.organizations.read().await;
        Ok(organizations.get(name).cloned())
    }

    async fn create(&self, organization: Organization) -> Result<Organization, DomainError> {
        let mut organizations = self.organizations.write().await;
        let name = organization.organization_name().to_string();

        if organizations.contains_key(&name) {
            return Err(DomainError::conflict(format!(
                "Organization '{}' already exists",
                name
            )));
        }

        organizations.insert(name, organization.clone());
        Ok(organization)
    }

    async fn update(&self, organization: &Organization) -> Result<Organization, DomainError> {
        let mut organizations = self.organizations.write().await;
        let name = organization.organization_name().to_string();

        if !organizations.contains_key(&name) {
            return Err(DomainError::not_found(format!(
                "Organization '{}' not found",
                name
            )));
        }

        organizations.insert(name, organization.clone());
        Ok(organization.clone())
    }

    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        let mut organizations = self.organizations.write().await;
        Ok(organizations.remove(name).is_some())
    }

    async fn list(&self) -> Result<Vec<Organization>, DomainError> {
        let organizations = self.organizations.read().await;
        Ok(organizations.values().cloned().collect())
    }
}
