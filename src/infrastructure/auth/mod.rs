//! Authentication infrastructure
//!
//! Password hashing and JWT token issuance/verification.

mod jwt;
mod password;

pub use jwt::{JwtConfig, JwtService, TokenClaims, TokenIssuer};
pub use password::{Argon2Hasher, PasswordHasher};
