//! Organization repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Organization;
use crate::domain::DomainError;

/// Repository trait for organization storage
#[async_trait]
pub trait OrganizationRepository: Send + Sync + Debug {
    /// Get an organization by its name
    async fn get_by_name(&self, name: &str) -> Result<Option<Organization>, DomainError>;

    /// Create a new organization
    async fn create(&self, organization: Organization) -> Result<Organization, DomainError>;

    /// Update an existing organization
    async fn update(&self, organization: &Organization) -> Result<Organization, DomainError>;

    /// Delete an organization by name, returns true if deleted
    async fn delete(&self, name: &str) -> Result<bool, DomainError>;

    /// List all organizations
    async fn list(&self) -> Result<Vec<Organization>, DomainError>;

    /// Check if an organization name is taken
    async fn name_exists(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_name(name).await?.is_some())
    }
}
