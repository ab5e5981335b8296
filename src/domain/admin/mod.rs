//! Admin domain
//!
//! Domain types for administrative accounts: the admin entity, credential
//! validation, and the repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::Admin;
pub use repository::AdminRepository;
pub use validation::{validate_email, validate_password, AdminValidationError};

#[cfg(test)]
pub use repository::mock::MockAdminRepository;
