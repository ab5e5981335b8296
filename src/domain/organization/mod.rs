//! Organization domain
//!
//! Domain types for tenant organizations: the organization entity, name
//! validation, partition name derivation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::Organization;
pub use repository::OrganizationRepository;
pub use validation::{
    sanitize_collection_name, validate_organization_name, OrganizationValidationError,
};

#[cfg(test)]
pub use repository::mock::MockOrganizationRepository;
