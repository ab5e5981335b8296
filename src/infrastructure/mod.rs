//! Infrastructure layer - Concrete service and storage implementations

pub mod admin;
pub mod auth;
pub mod logging;
pub mod organization;
pub mod partition;
pub mod provisioning;
