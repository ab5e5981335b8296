//! Tenant provisioning

mod service;

pub use service::{
    CreateOrganizationRequest, DeletedOrganization, ProvisioningService,
    UpdateOrganizationRequest,
};
