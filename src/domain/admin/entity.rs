//! Admin entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Administrative account for an organization
///
/// Exactly one admin exists per organization; the email is the credential
/// identity and is unique across all admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    /// Unique identifier
    id: String,
    /// Login email, unique across admins
    email: String,
    /// Argon2 password hash. Serialized for persistence only; API responses
    /// go through dedicated view types that never include it.
    password_hash: String,
    /// Name of the organization this admin manages
    organization_name: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
}

impl Admin {
    /// Create a new admin
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        organization_name: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into(),
            password_hash: password_hash.into(),
            organization_name: organization_name.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Update the login email
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Update the password hash
    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
    }
}
