//! Domain layer - Core business logic and entities

pub mod admin;
pub mod error;
pub mod organization;
pub mod partition;

pub use admin::{validate_email, validate_password, Admin, AdminRepository, AdminValidationError};
pub use error::DomainError;
pub use organization::{
    sanitize_collection_name, validate_organization_name, Organization, OrganizationRepository,
    OrganizationValidationError,
};
pub use partition::{PartitionMarker, PartitionStore};
