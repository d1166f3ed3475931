use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::auth::models::UserResponse;

// Registration request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RegisterRequest)]
pub struct RegisterRequest {
    /// Username (optional, defaults to the local part of the email)
    #[schema(example = "johndoe")]
    pub username: Option<String>,

    /// Email address
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Password (at least 6 characters, will be hashed)
    #[schema(example = "password123")]
    pub password: String,

    /// Password confirmation, must match password
    #[schema(example = "password123")]
    pub confirm_password: String,

    /// Role (optional, defaults to "user")
    #[schema(example = "user")]
    pub role: Option<String>,
}

// Login request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LoginRequest)]
pub struct LoginRequest {
    /// Email address
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "password123")]
    pub password: String,
}

// Response for register and login
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = AuthResponse)]
pub struct AuthResponse {
    pub message: String,

    /// JWT bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,

    /// When the token expires
    pub expires_at: DateTime<Utc>,

    /// User information (without password)
    pub user: UserResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = ChangePasswordRequest)]
pub struct ChangePasswordRequest {
    pub current_password: String,

    /// New password (at least 6 characters)
    pub new_password: String,

    /// Must match new_password
    pub confirm_password: String,
}

/// Aggregate user counts for the admin panel
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = UserStatistics)]
pub struct UserStatistics {
    pub total_users: i64,
    pub active_users: i64,
    pub admin_users: i64,
    pub user_users: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(as = AdminPanelResponse)]
pub struct AdminPanelResponse {
    pub message: String,
    pub statistics: UserStatistics,
    /// The five most recent registrations
    pub recent_users: Vec<UserResponse>,
}
