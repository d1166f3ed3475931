use axum::{Json, extract::State, http::StatusCode};

use crate::domains::bmi::models::{
    AdminBmiListResponse, BmiRecord, BmiRequest, BmiResponse, BmiResult, BmiStatistics,
};
use crate::domains::bmi::services::calculator;
use crate::shared::errors::BmiError;
use crate::shared::middleware::auth::{AdminUser, AuthenticatedUser};
use crate::shared::services::AppState;

fn to_result(record: BmiRecord) -> BmiResult {
    let advice = calculator::bmi_advice(record.bmi_value).to_string();

    BmiResult {
        id: record.id,
        height: record.height,
        weight: record.weight,
        gender: record.gender,
        bmi_value: record.bmi_value,
        bmi_category: record.bmi_category,
        advice,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

#[utoipa::path(
    post,
    path = "/api/bmi/calculate",
    request_body = BmiRequest,
    responses(
        (status = 200, description = "BMI calculated and stored", body = BmiResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "BMI"
)]
pub async fn calculate(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<BmiRequest>,
) -> Result<Json<BmiResponse>, (StatusCode, Json<serde_json::Value>)> {
    let record = app_state
        .bmi_state
        .bmi_service
        .calculate_and_store(authenticated_user.user_id, request)
        .await
        .map_err(|e: BmiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(BmiResponse {
        message: "BMI calculated and stored successfully".to_string(),
        data: to_result(record),
    }))
}

#[utoipa::path(
    get,
    path = "/api/bmi/my-bmi",
    responses(
        (status = 200, description = "BMI record retrieved", body = BmiResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No BMI record yet"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "BMI"
)]
pub async fn my_bmi(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<BmiResponse>, (StatusCode, Json<serde_json::Value>)> {
    let record = app_state
        .bmi_state
        .bmi_service
        .get_my_bmi(authenticated_user.user_id)
        .await
        .map_err(|e: BmiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(BmiResponse {
        message: "BMI record retrieved".to_string(),
        data: to_result(record),
    }))
}

#[utoipa::path(
    get,
    path = "/api/bmi/all-users-bmi",
    responses(
        (status = 200, description = "All BMI records", body = AdminBmiListResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "BMI"
)]
pub async fn all_users_bmi(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<AdminBmiListResponse>, (StatusCode, Json<serde_json::Value>)> {
    let entries = app_state
        .bmi_state
        .bmi_service
        .list_all()
        .await
        .map_err(|e: BmiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(AdminBmiListResponse {
        message: format!("Retrieved BMI records for {} users", entries.len()),
        data: entries,
    }))
}

#[utoipa::path(
    get,
    path = "/api/bmi/statistics",
    responses(
        (status = 200, description = "BMI statistics", body = BmiStatistics),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required"),
        (status = 500, description = "Internal server error")
    ),
    security(("BearerAuth" = [])),
    tag = "BMI"
)]
pub async fn statistics(
    State(app_state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<BmiStatistics>, (StatusCode, Json<serde_json::Value>)> {
    let stats = app_state
        .bmi_state
        .bmi_service
        .statistics()
        .await
        .map_err(|e: BmiError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(stats))
}
