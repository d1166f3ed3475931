// Auth domain routes
use axum::{
    Router,
    routing::{get, post},
};

use crate::domains::auth::handlers::auth_handler;
use crate::shared::services::AppState;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth_handler::register))
        .route("/login", post(auth_handler::login))
        .route("/profile", get(auth_handler::profile))
        .route("/change-password", post(auth_handler::change_password))
        .route("/admin", get(auth_handler::admin_panel))
}
