//! In-memory admin repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::admin::{Admin, AdminRepository};
use crate::domain::DomainError;

/// In-memory implementation of AdminRepository
#[derive(Debug, Default)]
pub struct InMemoryAdminRepository {
    admins: Arc<RwLock<HashMap<String, Admin>>>,
    /// Index for email -> admin ID lookup
    email_index: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryAdminRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn get_by_email(&self, email: &str) -> Result<Option<Admin>, DomainError> {
        let email_index = self.email_index.read().await;

        if let Some(id) = email_index.get(email) {
            let admins = self.admins.read().await;
            return Ok(admins.get(id).cloned());
        }

        Ok(None)
    }

    async fn create(&self, admin: Admin) -> Result<Admin, DomainError> {
        let mut admins = self.admins.write().await;
        let mut email_index = self.email_index.write().await;

        let id = admin.id().to_string();
        let email = admin.email().to_string();

        if email_index.contains_key(&email) {
            return Err(DomainError::conflict(format!(
                "Admin email '{}' already registered",
                email
            )));
        }

        email_index.insert(email, id.clone());
        admins.insert(id, admin.clone());

        Ok(admin)
    }

    async fn update(&self, admin: &Admin) -> Result<Admin, DomainError> {
        let mut admins = self.admins.write().await;
        let mut email_index = self.email_index.write().await;

        let id = admin.id().to_string();

        let old_admin = admins.get(&id).ok_or_else(|| {
            DomainError::not_found(format!("Admin '{}' not found", admin.email()))
        })?;

        let old_email = old_admin.email().to_string();
        let new_email = admin.email().to_string();

        // If the email changed, check uniqueness and update the index
        if old_email != new_email {
            if email_index.contains_key(&new_email) {
                return Err(DomainError::conflict(format!(
                    "Admin email '{}' already registered",
                    new_email
                )));
            }

            email_index.remove(&old_email);
            email_index.insert(new_email, id.clone());
        }

        admins.insert(id, admin.clone());
        Ok(admin.clone())
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let mut admins = self.admins.write().await;
        let mut email_index = self.email_index.write().await;

        if let Some(id) = email_index.remove(email) {
            Ok(admins.remove(&id).is_some())
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_admin(email: &str) -> Admin {
        Admin::new(email, "hashed_password", "test_corp")
    }

    #[tokio::test]
    async fn test_create_and_get_by_email() {
        let repo = InMemoryAdminRepository::new();

        repo.create(test_admin("admin@testcorp.com")).await.unwrap();

        let retrieved = repo.get_by_email("admin@testcorp.com").await.unwrap();
        assert!(retrieved.is_some());
        assert_eq!(retrieved.unwrap().organization_name(), "test_corp");

        let missing = repo.get_by_email("nobody@testcorp.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let repo = InMemoryAdminRepository::new();

        repo.create(test_admin("admin@testcorp.com")).await.unwrap();

        let result = repo.create(test_admin("admin@testcorp.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_email_reindexes() {
        let repo = InMemoryAdminRepository::new();
        let mut admin = test_admin("admin@testcorp.com");

        repo.create(admin.clone()).await.unwrap();

        admin.set_email("new@testcorp.com");
        repo.update(&admin).await.unwrap();

        assert!(repo
            .get_by_email("admin@testcorp.com")
            .await
            .unwrap()
            .is_none());
        assert!(repo.get_by_email("new@testcorp.com").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_update_email_conflict() {
        let repo = InMemoryAdminRepository::new();
        let mut second = test_admin("second@testcorp.com");

        repo.create(test_admin("first@testcorp.com")).await.unwrap();
        repo.create(second.clone()).await.unwrap();

        second.set_email("first@testcorp.com");

        let result = repo.update(&second).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_delete_by_email() {
        let repo = InMemoryAdminRepository::new();

        repo.create(test_admin("admin@testcorp.com")).await.unwrap();

        assert!(repo.delete_by_email("admin@testcorp.com").await.unwrap());
        assert!(!repo.delete_by_email("admin@testcorp.com").await.unwrap());

        // Index entry is gone too
        assert!(repo
            .get_by_email("admin@testcorp.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_email_exists() {
        let repo = InMemoryAdminRepository::new();

        assert!(!repo.email_exists("admin@testcorp.com").await.unwrap());

        repo.create(test_admin("admin@testcorp.com")).await.unwrap();
        assert!(repo.email_exists("admin@testcorp.com").await.unwrap());
    }
}
