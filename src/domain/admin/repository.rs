//! Admin repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::Admin;
use crate::domain::DomainError;

/// Repository trait for admin storage
#[async_trait]
pub trait AdminRepository: Send + Sync + Debug {
    /// Get an admin by their email (the login identity)
    async fn get_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError>;

    /// Create a new admin
    async fn create(&self, admin: Admin) -> Result<Admin, DomainError>;

    /// Update an existing admin, matched by id
    async fn update(&self, admin: &Admin) -> Result<Admin, DomainError>;

    /// Delete an admin by email, returns true if deleted
    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}
