//! Tenant partition store implementations

mod in_memory;
mod postgres;

pub use in_memory::InMemoryPartitionStore;
pub use postgres::PostgresPartitionStore;
