//! Authentication API endpoints
//!
//! Provides the admin login endpoint for JWT-based authentication.

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response carrying a bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

/// Login with admin email and password
///
/// POST /admin/login
///
/// Returns a JWT token on successful authentication. Unknown emails and
/// wrong passwords produce the same error.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let admin = state
        .admin_service
        .authenticate(&request.email, &request.password)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    // The organization reference is best-effort; a token is still issued
    // when the record cannot be resolved.
    let organization = state
        .provisioning_service
        .get(admin.organization_name())
        .await
        .map_err(ApiError::from)?;

    let token = state
        .token_service
        .issue(&admin, organization.as_ref())
        .map_err(ApiError::from)?;

    info!(email = %admin.email(), "Admin logged in");

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    use crate::api::test_support::test_state_with_org;

    #[tokio::test]
    async fn test_login_success() {
        let state = test_state_with_org("acme", "admin@acme.com", "s3cret-pass").await;

        let response = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "admin@acme.com".to_string(),
                password: "s3cret-pass".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.token_type, "bearer");

        let claims = state.token_service.verify(&response.0.access_token).unwrap();
        assert_eq!(claims.sub, "admin@acme.com");
        assert_eq!(claims.organization_name, "acme");
        assert!(claims.organization_id.is_some());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let state = test_state_with_org("acme", "admin@acme.com", "s3cret-pass").await;

        let err = login(
            State(state),
            Json(LoginRequest {
                email: "admin@acme.com".to_string(),
                password: "wrong-pass".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let state = test_state_with_org("acme", "admin@acme.com", "s3cret-pass").await;

        let err = login(
            State(state),
            Json(LoginRequest {
                email: "nobody@acme.com".to_string(),
                password: "s3cret-pass".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
