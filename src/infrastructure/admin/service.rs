//! Admin authentication service

use std::sync::Arc;

use crate::domain::admin::{Admin, AdminRepository};
use crate::domain::DomainError;

use super::super::auth::PasswordHasher;

/// Service for authenticating admins by email and password
#[derive(Debug)]
pub struct AdminService<R: AdminRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: AdminRepository, H: PasswordHasher> AdminService<R, H> {
    /// Create a new admin service
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Authenticate an admin with email and password
    ///
    /// Returns None for an unknown email or a wrong password; callers map
    /// both to the same error so neither check leaks.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Admin>, DomainError> {
        let admin = match self.repository.get_by_email(email).await? {
            Some(a) => a,
            None => return Ok(None),
        };

        if !self.hasher.verify(password, admin.password_hash()) {
            return Ok(None);
        }

        Ok(Some(admin))
    }

    /// Get an admin by email
    pub async fn get_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError> {
        self.repository.get_by_email(email).await
    }
}
