use axum::{Json, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Authentication and account errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Email already registered: {email}")]
    EmailAlreadyExists { email: String },

    #[error("Username already taken: {username}")]
    UsernameAlreadyTaken { username: String },

    /// Unknown role values are rejected at the registration boundary
    #[error("Invalid role: {role}. Valid roles: admin, user")]
    InvalidRole { role: String },

    #[error("Validation error: {0}")]
    Validation(String),

    /// Deliberately does not reveal whether the email or the password was wrong
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("User not found: id={id}")]
    UserNotFound { id: i64 },

    #[error("Failed to hash password: {0}")]
    PasswordHashingFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Invalid or expired token")]
    InvalidToken,
}

impl From<AuthError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: AuthError) -> Self {
        let status = match &err {
            AuthError::EmailAlreadyExists { .. }
            | AuthError::UsernameAlreadyTaken { .. }
            | AuthError::InvalidRole { .. }
            | AuthError::Validation(_)
            | AuthError::AccountDisabled => StatusCode::BAD_REQUEST,
            AuthError::InvalidCredentials | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound { .. } => StatusCode::NOT_FOUND,
            AuthError::PasswordHashingFailed(_)
            | AuthError::DatabaseError(_)
            | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
