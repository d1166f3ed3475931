use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;

use crate::domains::auth::models::{
    AdminPanelResponse, AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest, Role,
    UserResponse,
};
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::{AdminUser, AuthenticatedUser};
use crate::shared::services::AppState;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered successfully", body = AuthResponse),
        (status = 400, description = "Validation error, or email/username already taken"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(app_state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<serde_json::Value>)> {
    let (user, token) = app_state
        .auth_state
        .auth_service
        .register(request)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    let expires_at = Utc::now() + app_state.auth_state.jwt_service.token_ttl();

    Ok(Json(AuthResponse {
        message: "User registered successfully".to_string(),
        token,
        expires_at,
        user: user.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid email or password"),
        (status = 400, description = "Account disabled"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, (StatusCode, Json<serde_json::Value>)> {
    let (user, token) = app_state
        .auth_state
        .auth_service
        .login(request)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    let message = match user.role {
        Role::Admin => format!("Welcome back, admin {}!", user.username),
        Role::User => format!("Welcome back, {}!", user.username),
    };

    let expires_at = Utc::now() + app_state.auth_state.jwt_service.token_ttl();

    Ok(Json(AuthResponse {
        message,
        token,
        expires_at,
        user: user.into(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/profile",
    responses(
        (status = 200, description = "Profile retrieved", body = UserResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn profile(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<UserResponse>, (StatusCode, Json<serde_json::Value>)> {
    let user = app_state
        .auth_state
        .auth_service
        .get_profile(authenticated_user.user_id)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(user.into()))
}

#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed"),
        (status = 400, description = "Validation error or wrong current password"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn change_password(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .auth_state
        .auth_service
        .change_password(authenticated_user.user_id, request)
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(serde_json::json!({
        "message": "Password changed successfully"
    })))
}

#[utoipa::path(
    get,
    path = "/api/auth/admin",
    responses(
        (status = 200, description = "Admin panel data", body = AdminPanelResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "Auth"
)]
pub async fn admin_panel(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<AdminPanelResponse>, (StatusCode, Json<serde_json::Value>)> {
    let (statistics, recent) = app_state
        .auth_state
        .auth_service
        .admin_panel()
        .await
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(AdminPanelResponse {
        message: "Admin panel data".to_string(),
        statistics,
        recent_users: recent.into_iter().map(Into::into).collect(),
    }))
}
