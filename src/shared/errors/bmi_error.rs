use axum::{Json, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// BMI domain errors
#[derive(Error, Debug)]
pub enum BmiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No BMI record found. Calculate your BMI first.")]
    RecordNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<BmiError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: BmiError) -> Self {
        let status = match &err {
            BmiError::Validation(_) => StatusCode::BAD_REQUEST,
            BmiError::RecordNotFound | BmiError::UserNotFound => StatusCode::NOT_FOUND,
            BmiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
