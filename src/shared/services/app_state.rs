use crate::domains::auth::services::{AuthState, JwtService};
use crate::domains::bmi::services::BmiState;
use crate::shared::config::{ConfigError, JwtConfig};
use crate::shared::database::Database;

/// Application state: the database handle plus every domain's services.
/// The signing configuration is injected here once and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth_state: AuthState,
    pub bmi_state: BmiState,
}

impl AppState {
    pub fn new(db: Database, jwt_config: JwtConfig) -> Result<Self, ConfigError> {
        let jwt_service = JwtService::new(jwt_config)?;

        Ok(Self {
            auth_state: AuthState::new(db.clone(), jwt_service),
            bmi_state: BmiState::new(db.clone()),
            db,
        })
    }
}
