//! Organization provisioning service
//!
//! Owns the tenant lifecycle: creating an organization provisions its admin
//! account, organization record, and dedicated data partition; deleting it
//! tears all three down. The multi-step write sequences are not atomic - a
//! failure mid-sequence leaves partial state behind, so every step is
//! logged.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::admin::{validate_email, validate_password, Admin, AdminRepository};
use crate::domain::organization::{
    validate_organization_name, Organization, OrganizationRepository,
};
use crate::domain::partition::{PartitionMarker, PartitionStore};
use crate::domain::DomainError;

use super::super::auth::PasswordHasher;

/// Request for creating a new organization
#[derive(Debug, Clone)]
pub struct CreateOrganizationRequest {
    pub organization_name: String,
    pub email: String,
    pub password: String,
}

/// Request for updating an organization's admin credentials
#[derive(Debug, Clone, Default)]
pub struct UpdateOrganizationRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Outcome of a successful deletion
#[derive(Debug, Clone)]
pub struct DeletedOrganization {
    pub message: String,
    pub deleted_collection: String,
}

/// Service provisioning and managing tenant organizations
#[derive(Debug)]
pub struct ProvisioningService<O, A, P, H>
where
    O: OrganizationRepository,
    A: AdminRepository,
    P: PartitionStore,
    H: PasswordHasher,
{
    organizations: Arc<O>,
    admins: Arc<A>,
    partitions: Arc<P>,
    hasher: Arc<H>,
}

impl<O, A, P, H> ProvisioningService<O, A, P, H>
where
    O: OrganizationRepository,
    A: AdminRepository,
    P: PartitionStore,
    H: PasswordHasher,
{
    /// Create a new provisioning service
    pub fn new(organizations: Arc<O>, admins: Arc<A>, partitions: Arc<P>, hasher: Arc<H>) -> Self {
        Self {
            organizations,
            admins,
            partitions,
            hasher,
        }
    }

    /// Create an organization with its admin account and data partition
    ///
    /// Write order: admin record, organization record, partition (seeded with
    /// its initialization marker). The sequence has no rollback; a failure
    /// after the first write leaves orphaned state.
    pub async fn create(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<Organization, DomainError> {
        validate_organization_name(&request.organization_name)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if self
            .organizations
            .name_exists(&request.organization_name)
            .await?
        {
            return Err(DomainError::conflict(format!(
                "Organization '{}' already exists",
                request.organization_name
            )));
        }

        if self.admins.email_exists(&request.email).await? {
            return Err(DomainError::conflict(format!(
                "Admin email '{}' already registered",
                request.email
            )));
        }

        let password_hash = self.hasher.hash(&request.password)?;

        let admin = self
            .admins
            .create(Admin::new(
                &request.email,
                password_hash,
                &request.organization_name,
            ))
            .await?;
        info!(organization = %request.organization_name, "Created admin record");

        let organization = self
            .organizations
            .create(Organization::new(
                &request.organization_name,
                admin.id(),
                admin.email(),
            ))
            .await?;
        info!(organization = %request.organization_name, "Created organization record");

        self.partitions
            .create_partition(
                organization.collection_name(),
                PartitionMarker::new(organization.organization_name()),
            )
            .await?;
        info!(
            organization = %request.organization_name,
            partition = %organization.collection_name(),
            "Created tenant partition"
        );

        Ok(organization)
    }

    /// Get an organization by name
    pub async fn get(&self, name: &str) -> Result<Option<Organization>, DomainError> {
        self.organizations.get_by_name(name).await
    }

    /// List all organizations
    pub async fn list(&self) -> Result<Vec<Organization>, DomainError> {
        self.organizations.list().await
    }

    /// Update an organization's admin email and/or password
    ///
    /// The caller must be the organization's admin. Changes target the admin
    /// record matched by the caller's current email; a new email also lands
    /// on the organization's `admin_email` field.
    pub async fn update(
        &self,
        name: &str,
        request: UpdateOrganizationRequest,
        caller_email: &str,
    ) -> Result<Organization, DomainError> {
        let mut organization = self
            .organizations
            .get_by_name(name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Organization '{}' not found", name)))?;

        let mut admin = self.authorize(name, caller_email).await?;
        let mut admin_changed = false;

        if let Some(email) = &request.email {
            validate_email(email).map_err(|e| DomainError::validation(e.to_string()))?;

            organization.set_admin_email(email);
            self.organizations.update(&organization).await?;

            admin.set_email(email);
            admin_changed = true;
        }

        if let Some(password) = &request.password {
            validate_password(password).map_err(|e| DomainError::validation(e.to_string()))?;

            let hash = self.hasher.hash(password)?;
            admin.set_password_hash(hash);
            admin_changed = true;
        }

        if admin_changed {
            self.admins.update(&admin).await?;
            info!(organization = %name, "Updated admin credentials");
        }

        // Re-read so the response reflects exactly what was persisted
        self.organizations
            .get_by_name(name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Organization '{}' not found", name)))
    }

    /// Delete an organization, its partition, and the caller's admin record
    ///
    /// Teardown order: partition, organization record, admin record. Like
    /// creation, the sequence has no rollback.
    pub async fn delete(
        &self,
        name: &str,
        caller_email: &str,
    ) -> Result<DeletedOrganization, DomainError> {
        let organization = self
            .organizations
            .get_by_name(name)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Organization '{}' not found", name)))?;

        self.authorize(name, caller_email).await?;

        let collection_name = organization.collection_name().to_string();

        self.partitions.drop_partition(&collection_name).await?;
        info!(organization = %name, partition = %collection_name, "Dropped tenant partition");

        self.organizations.delete(name).await?;
        info!(organization = %name, "Deleted organization record");

        if !self.admins.delete_by_email(caller_email).await? {
            warn!(organization = %name, "Admin record was already gone during deletion");
        }

        Ok(DeletedOrganization {
            message: format!("Organization '{}' deleted successfully", name),
            deleted_collection: collection_name,
        })
    }

    /// Check that the caller is the organization's admin
    async fn authorize(&self, name: &str, caller_email: &str) -> Result<Admin, DomainError> {
        let admin = self.admins.get_by_email(caller_email).await?;

        match admin {
            Some(a) if a.organization_name() == name => Ok(a),
            _ => Err(DomainError::forbidden(format!(
                "Not authorized to manage organization '{}'",
                name
            ))),
        }
    }
}
