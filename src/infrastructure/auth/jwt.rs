//! JWT token issuance and verification

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::{Admin, DomainError, Organization};

/// Claim set embedded in every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (admin email)
    pub sub: String,
    /// Identifier of the admin's organization, if it exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
    /// Name of the admin's organization
    pub organization_name: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
}

impl TokenClaims {
    /// Create claims for an admin, with the organization reference resolved
    /// at login time (tolerated as absent if the record is missing)
    pub fn new(admin: &Admin, organization: Option<&Organization>, ttl_minutes: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::minutes(ttl_minutes as i64);

        Self {
            sub: admin.email().to_string(),
            organization_id: organization.map(|o| o.id().to_string()),
            organization_name: admin.organization_name().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Check if the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Configuration for the JWT service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Token lifetime in minutes
    pub ttl_minutes: u64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, ttl_minutes: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_minutes,
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            ttl_minutes: 30,
        }
    }
}

/// Trait for token operations
pub trait TokenIssuer: Send + Sync + Debug {
    /// Issue a signed token for an admin
    fn issue(
        &self,
        admin: &Admin,
        organization: Option<&Organization>,
    ) -> Result<String, DomainError>;

    /// Verify a token's signature and expiry, returning the claims
    fn verify(&self, token: &str) -> Result<TokenClaims, DomainError>;

    /// Configured token lifetime in minutes
    fn ttl_minutes(&self) -> u64;
}

/// HS256 JWT service using a single server-held secret
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("ttl_minutes", &self.config.ttl_minutes)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenIssuer for JwtService {
    fn issue(
        &self,
        admin: &Admin,
        organization: Option<&Organization>,
    ) -> Result<String, DomainError> {
        let claims = TokenClaims::new(admin, organization, self.config.ttl_minutes);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to issue token: {}", e)))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, DomainError> {
        let mut validation = Validation::default();
        // Expiry is exact; no grace window past `exp`
        validation.leeway = 0;

        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| DomainError::unauthorized("Could not validate credentials"))?;

        // A token without a subject carries no identity
        if token_data.claims.sub.is_empty() {
            return Err(DomainError::unauthorized("Could not validate credentials"));
        }

        Ok(token_data.claims)
    }

    fn ttl_minutes(&self) -> u64 {
        self.config.ttl_minutes
    }
}
