// Routes module: combines all domain routers
use axum::Router;

use crate::domains::auth::routes::create_auth_router;
use crate::domains::bmi::routes::create_bmi_router;
use crate::shared::services::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", create_auth_router())
        .nest("/api/bmi", create_bmi_router())
}
