//! Admin storage and authentication implementations

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresAdminRepository;
pub use repository::InMemoryAdminRepository;
pub use service::AdminService;
