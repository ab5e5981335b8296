//! Organization Registry API
//!
//! Multi-tenant organization management: registering an organization
//! provisions an isolated data partition plus an admin account, and the
//! record is managed over a JWT-authenticated HTTP API.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::{AdminServiceTrait, AppState, ProvisioningServiceTrait};
use infrastructure::admin::{
    AdminService, InMemoryAdminRepository, PostgresAdminRepository,
};
use infrastructure::auth::{Argon2Hasher, JwtConfig, JwtService};
use infrastructure::organization::{
    InMemoryOrganizationRepository, PostgresOrganizationRepository,
};
use infrastructure::partition::{InMemoryPartitionStore, PostgresPartitionStore};
use infrastructure::provisioning::ProvisioningService;

/// Create the application state with all services initialized
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Arc::new(Argon2Hasher::new());
    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.secret.clone(),
        config.auth.token_ttl_minutes,
    )));

    info!("Storage backend: {}", config.storage.backend);

    let (provisioning_service, admin_service): (
        Arc<dyn ProvisioningServiceTrait>,
        Arc<dyn AdminServiceTrait>,
    ) = if config.storage.backend == "postgres" {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        info!("Connecting to PostgreSQL...");
        let pg_pool = sqlx::PgPool::connect(&database_url)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
        info!("PostgreSQL connection established");

        let organizations = Arc::new(PostgresOrganizationRepository::new(pg_pool.clone()));
        organizations.ensure_table().await?;
        let admins = Arc::new(PostgresAdminRepository::new(pg_pool.clone()));
        admins.ensure_table().await?;
        let partitions = Arc::new(PostgresPartitionStore::new(pg_pool));

        (
            Arc::new(ProvisioningService::new(
                organizations,
                admins.clone(),
                partitions,
                hasher.clone(),
            )),
            Arc::new(AdminService::new(admins, hasher)),
        )
    } else {
        let organizations = Arc::new(InMemoryOrganizationRepository::new());
        let admins = Arc::new(InMemoryAdminRepository::new());
        let partitions = Arc::new(InMemoryPartitionStore::new());

        (
            Arc::new(ProvisioningService::new(
                organizations,
                admins.clone(),
                partitions,
                hasher.clone(),
            )),
            Arc::new(AdminService::new(admins, hasher)),
        )
    };

    Ok(AppState::new(
        provisioning_service,
        admin_service,
        jwt_service,
    ))
}
