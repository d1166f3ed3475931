// BMI domain routes
use axum::{
    Router,
    routing::{get, post},
};

use crate::domains::bmi::handlers::bmi_handler;
use crate::shared::services::AppState;

pub fn create_bmi_router() -> Router<AppState> {
    Router::new()
        .route("/calculate", post(bmi_handler::calculate))
        .route("/my-bmi", get(bmi_handler::my_bmi))
        .route("/all-users-bmi", get(bmi_handler::all_users_bmi))
        .route("/statistics", get(bmi_handler::statistics))
}
