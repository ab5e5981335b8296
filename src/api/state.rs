//! Application state for shared services

use std::sync::Arc;

use crate::domain::admin::{Admin, AdminRepository};
use crate::domain::organization::{Organization, OrganizationRepository};
use crate::domain::partition::PartitionStore;
use crate::domain::DomainError;
use crate::infrastructure::admin::AdminService;
use crate::infrastructure::auth::{PasswordHasher, TokenIssuer};
use crate::infrastructure::provisioning::{
    CreateOrganizationRequest, DeletedOrganization, ProvisioningService, UpdateOrganizationRequest,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub provisioning_service: Arc<dyn ProvisioningServiceTrait>,
    pub admin_service: Arc<dyn AdminServiceTrait>,
    pub token_service: Arc<dyn TokenIssuer>,
}

/// Trait for organization provisioning operations
#[async_trait::async_trait]
pub trait ProvisioningServiceTrait: Send + Sync {
    async fn create(&self, request: CreateOrganizationRequest)
        -> Result<Organization, DomainError>;
    async fn get(&self, name: &str) -> Result<Option<Organization>, DomainError>;
    async fn list(&self) -> Result<Vec<Organization>, DomainError>;
    async fn update(
        &self,
        name: &str,
        request: UpdateOrganizationRequest,
        caller_email: &str,
    ) -> Result<Organization, DomainError>;
    async fn delete(
        &self,
        name: &str,
        caller_email: &str,
    ) -> Result<DeletedOrganization, DomainError>;
}

/// Trait for admin account operations
#[async_trait::async_trait]
pub trait AdminServiceTrait: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str)
        -> Result<Option<Admin>, DomainError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<O, A, P, H> ProvisioningServiceTrait for ProvisioningService<O, A, P, H>
where
    O: OrganizationRepository + 'static,
    A: AdminRepository + 'static,
    P: PartitionStore + 'static,
    H: PasswordHasher + 'static,
{
    async fn create(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<Organization, DomainError> {
        ProvisioningService::create(self, request).await
    }

    async fn get(&self, name: &str) -> Result<Option<Organization>, DomainError> {
        ProvisioningService::get(self, name).await
    }

    async fn list(&self) -> Result<Vec<Organization>, DomainError> {
        ProvisioningService::list(self).await
    }

    async fn update(
        &self,
        name: &str,
        request: UpdateOrganizationRequest,
        caller_email: &str,
    ) -> Result<Organization, DomainError> {
        ProvisioningService::update(self, name, request, caller_email).await
    }

    async fn delete(
        &self,
        name: &str,
        caller_email: &str,
    ) -> Result<DeletedOrganization, DomainError> {
        ProvisioningService::delete(self, name, caller_email).await
    }
}

#[async_trait::async_trait]
impl<R, H> AdminServiceTrait for AdminService<R, H>
where
    R: AdminRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Admin>, DomainError> {
        AdminService::authenticate(self, email, password).await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError> {
        AdminService::get_by_email(self, email).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        provisioning_service: Arc<dyn ProvisioningServiceTrait>,
        admin_service: Arc<dyn AdminServiceTrait>,
        token_service: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            provisioning_service,
            admin_service,
            token_service,
        }
    }
}
