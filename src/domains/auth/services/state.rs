use crate::domains::auth::services::{AuthService, JwtService};
use crate::shared::database::Database;

/// Auth domain state
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub jwt_service: JwtService,
}

impl AuthState {
    pub fn new(db: Database, jwt_service: JwtService) -> Self {
        Self {
            auth_service: AuthService::new(db, jwt_service.clone()),
            jwt_service,
        }
    }
}
