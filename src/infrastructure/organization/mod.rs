//! Organization storage implementations

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresOrganizationRepository;
pub use repository::InMemoryOrganizationRepository;
