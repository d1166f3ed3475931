use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use serde_json::json;

use crate::domains::auth::models::Role;
use crate::shared::services::AppState;

/// Authorization context extracted from a verified bearer token.
///
/// Usage: add `authenticated_user: AuthenticatedUser` as a handler argument
/// and the request is rejected with 401 before the handler runs unless it
/// carries a valid token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Same as [`AuthenticatedUser`], but additionally requires the admin role
/// (403 otherwise).
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthenticatedUser);

fn unauthorized(message: &str) -> (StatusCode, axum::Json<serde_json::Value>) {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({ "error": message })),
    )
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| unauthorized("Missing authorization header"))?
            .to_str()
            .map_err(|_| unauthorized("Invalid authorization header"))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            unauthorized("Invalid authorization format. Expected: 'Bearer <token>'")
        })?;

        // Failure kinds stay distinguishable in the logs; the response is a
        // uniform 401 either way
        let claims = state
            .auth_state
            .jwt_service
            .verify(token)
            .map_err(|e| {
                tracing::warn!(error = %e, "token verification failed");
                unauthorized("Unauthorized")
            })?;

        Ok(AuthenticatedUser {
            user_id: claims.user_id,
            username: claims.username,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthenticatedUser::from_request_parts(parts, state).await?;

        if user.role != Role::Admin {
            return Err((
                StatusCode::FORBIDDEN,
                axum::Json(json!({ "error": "Admin role required" })),
            ));
        }

        Ok(AdminUser(user))
    }
}
