//! Organization API endpoints
//!
//! Registration is open; update and delete require a bearer token whose
//! admin belongs to the targeted organization.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::middleware::RequireAdmin;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::organization::Organization;
use crate::infrastructure::provisioning::{CreateOrganizationRequest, UpdateOrganizationRequest};

/// Create the organization router
pub fn create_organization_router() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_organization))
        .route("/get", get(get_organization))
        .route("/update", put(update_organization))
        .route("/delete", delete(delete_organization))
}

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub organization_name: String,
    pub email: String,
    pub password: String,
}

/// Partial update of the caller's admin credentials
#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Query parameters addressing an organization by name
#[derive(Debug, Deserialize)]
pub struct OrganizationQuery {
    pub organization_name: String,
}

/// Organization response (safe to expose)
#[derive(Debug, Serialize)]
pub struct OrganizationResponse {
    pub organization_name: String,
    pub collection_name: String,
    pub admin_email: String,
    pub created_at: String,
}

impl OrganizationResponse {
    fn from_organization(organization: &Organization) -> Self {
        Self {
            organization_name: organization.organization_name().to_string(),
            collection_name: organization.collection_name().to_string(),
            admin_email: organization.admin_email().to_string(),
            created_at: organization.created_at().to_rfc3339(),
        }
    }
}

/// Deletion response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_collection: String,
}

/// Register a new organization with its admin account
///
/// POST /org/create
pub async fn create_organization(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<OrganizationResponse>), ApiError> {
    let organization = state
        .provisioning_service
        .create(CreateOrganizationRequest {
            organization_name: request.organization_name,
            email: request.email,
            password: request.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(OrganizationResponse::from_organization(&organization)),
    ))
}

/// Fetch an organization by name
///
/// GET /org/get?organization_name=
pub async fn get_organization(
    State(state): State<AppState>,
    Query(query): Query<OrganizationQuery>,
) -> Result<Json<OrganizationResponse>, ApiError> {
    let organization = state
        .provisioning_service
        .get(&query.organization_name)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "Organization '{}' not found",
                query.organization_name
            ))
        })?;

    Ok(Json(OrganizationResponse::from_organization(&organization)))
}

/// Update the calling admin's credentials on their organization
///
/// PUT /org/update?organization_name=
pub async fn update_organization(
    State(state): State<AppState>,
    RequireAdmin(claims): RequireAdmin,
    Query(query): Query<OrganizationQuery>,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<OrganizationResponse>, ApiError> {
    let organization = state
        .provisioning_service
        .update(
            &query.organization_name,
            UpdateOrganizationRequest {
                email: request.email,
                password: request.password,
            },
            &claims.sub,
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Json(OrganizationResponse::from_organization(&organization)))
}

/// Delete an organization, its partition, and the calling admin
///
/// DELETE /org/delete?organization_name=
pub async fn delete_organization(
    State(state): State<AppState>,
    RequireAdmin(claims): RequireAdmin,
    Query(query): Query<OrganizationQuery>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = state
        .provisioning_service
        .delete(&query.organization_name, &claims.sub)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(DeleteResponse {
        message: deleted.message,
        deleted_collection: deleted.deleted_collection,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::FromRequestParts;
    use axum::http::{header, Request};

    use crate::api::auth::{login, LoginRequest};
    use crate::api::test_support::{test_state, test_state_with_org};
    use crate::infrastructure::auth::TokenClaims;

    fn query(name: &str) -> Query<OrganizationQuery> {
        Query(OrganizationQuery {
            organization_name: name.to_string(),
        })
    }

    /// Claims as the bearer gate would yield them for this admin
    async fn bearer_claims(state: &AppState, email: &str) -> TokenClaims {
        let admin = state
            .admin_service
            .get_by_email(email)
            .await
            .unwrap()
            .expect("admin should exist");

        let token = state.token_service.issue(&admin, None).unwrap();
        state.token_service.verify(&token).unwrap()
    }

    #[tokio::test]
    async fn test_create_organization() {
        let state = test_state();

        let (status, response) = create_organization(
            State(state),
            Json(RegisterRequest {
                organization_name: "Test Corp!".to_string(),
                email: "admin@test.com".to_string(),
                password: "s3cret-pass".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.0.organization_name, "Test Corp!");
        assert_eq!(response.0.collection_name, "org_test_corp_");
        assert_eq!(response.0.admin_email, "admin@test.com");
    }

    #[tokio::test]
    async fn test_create_duplicate_name_conflicts() {
        let state = test_state_with_org("acme", "admin@acme.com", "s3cret-pass").await;

        let err = create_organization(
            State(state),
            Json(RegisterRequest {
                organization_name: "acme".to_string(),
                email: "other@acme.com".to_string(),
                password: "s3cret-pass".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_get_organization() {
        let state = test_state_with_org("acme", "admin@acme.com", "s3cret-pass").await;

        let response = get_organization(State(state), query("acme")).await.unwrap();

        assert_eq!(response.0.organization_name, "acme");
        assert_eq!(response.0.collection_name, "org_acme");
    }

    #[tokio::test]
    async fn test_get_missing_organization() {
        let state = test_state();

        let err = get_organization(State(state), query("ghost"))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_rotates_admin_email() {
        let state = test_state_with_org("acme", "admin@acme.com", "s3cret-pass").await;
        let claims = bearer_claims(&state, "admin@acme.com").await;

        let response = update_organization(
            State(state.clone()),
            RequireAdmin(claims),
            query("acme"),
            Json(UpdateRequest {
                email: Some("new@acme.com".to_string()),
                password: None,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.admin_email, "new@acme.com");

        let rotated = state
            .admin_service
            .get_by_email("new@acme.com")
            .await
            .unwrap();
        assert!(rotated.is_some());
    }

    #[tokio::test]
    async fn test_update_by_foreign_admin_is_forbidden() {
        let state = test_state_with_org("acme", "admin@acme.com", "s3cret-pass").await;
        crate::api::test_support::provision(&state, "globex", "admin@globex.com", "s3cret-pass")
            .await;
        let outsider = bearer_claims(&state, "admin@globex.com").await;

        let err = update_organization(
            State(state),
            RequireAdmin(outsider),
            query("acme"),
            Json(UpdateRequest {
                email: None,
                password: Some("another-pass".to_string()),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_delete_organization() {
        let state = test_state_with_org("acme", "admin@acme.com", "s3cret-pass").await;
        let claims = bearer_claims(&state, "admin@acme.com").await;

        let response = delete_organization(State(state.clone()), RequireAdmin(claims), query("acme"))
            .await
            .unwrap();

        assert_eq!(response.0.deleted_collection, "org_acme");
        assert!(state
            .provisioning_service
            .get("acme")
            .await
            .unwrap()
            .is_none());
        assert!(state
            .admin_service
            .get_by_email("admin@acme.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_organization() {
        let state = test_state_with_org("acme", "admin@acme.com", "s3cret-pass").await;
        let claims = bearer_claims(&state, "admin@acme.com").await;

        let err = delete_organization(State(state), RequireAdmin(claims), query("ghost"))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_full_lifecycle_with_issued_tokens() {
        let state = test_state();

        // Register
        let (status, _) = create_organization(
            State(state.clone()),
            Json(RegisterRequest {
                organization_name: "acme".to_string(),
                email: "admin@acme.com".to_string(),
                password: "s3cret-pass".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        // Login and push the issued token through the bearer gate
        let login_response = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "admin@acme.com".to_string(),
                password: "s3cret-pass".to_string(),
            }),
        )
        .await
        .unwrap();

        let request = Request::builder()
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", login_response.0.access_token),
            )
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        let RequireAdmin(claims) = RequireAdmin::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(claims.sub, "admin@acme.com");

        // Read back
        let fetched = get_organization(State(state.clone()), query("acme"))
            .await
            .unwrap();
        assert_eq!(fetched.0.collection_name, "org_acme");

        // Rotate the password with the gated claims
        update_organization(
            State(state.clone()),
            RequireAdmin(claims.clone()),
            query("acme"),
            Json(UpdateRequest {
                email: None,
                password: Some("rotated-pass-99".to_string()),
            }),
        )
        .await
        .unwrap();

        assert!(state
            .admin_service
            .authenticate("admin@acme.com", "s3cret-pass")
            .await
            .unwrap()
            .is_none());
        assert!(state
            .admin_service
            .authenticate("admin@acme.com", "rotated-pass-99")
            .await
            .unwrap()
            .is_some());

        // Tear down
        let deleted =
            delete_organization(State(state.clone()), RequireAdmin(claims.clone()), query("acme"))
                .await
                .unwrap();
        assert_eq!(deleted.0.deleted_collection, "org_acme");

        // Replaying the still-valid token targets a gone organization
        let err = delete_organization(State(state), RequireAdmin(claims), query("acme"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
