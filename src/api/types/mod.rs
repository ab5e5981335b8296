//! Shared API types: error envelope and JSON extractor

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
