//! Organization entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::sanitize_collection_name;

/// Organization record - one per tenant
///
/// The organization name is the primary business key; the partition name is
/// derived from it once at creation time and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier
    id: String,
    /// Human-readable name, unique across all organizations
    organization_name: String,
    /// Name of the tenant's dedicated data partition
    collection_name: String,
    /// Identifier of the administrative account
    admin_id: String,
    /// Email of the administrative account
    admin_email: String,
    /// Creation timestamp, set once
    created_at: DateTime<Utc>,
}

impl Organization {
    /// Create a new organization, deriving the partition name
    pub fn new(
        organization_name: impl Into<String>,
        admin_id: impl Into<String>,
        admin_email: impl Into<String>,
    ) -> Self {
        let organization_name = organization_name.into();
        let collection_name = sanitize_collection_name(&organization_name);

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            organization_name,
            collection_name,
            admin_id: admin_id.into(),
            admin_email: admin_email.into(),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn admin_id(&self) -> &str {
        &self.admin_id
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Update the recorded admin email
    pub fn set_admin_email(&mut self, email: impl Into<String>) {
        self.admin_email = email.into();
    }
}
