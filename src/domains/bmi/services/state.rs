use crate::domains::bmi::services::BmiService;
use crate::shared::database::Database;

/// BMI domain state
#[derive(Clone)]
pub struct BmiState {
    pub bmi_service: BmiService,
}

impl BmiState {
    pub fn new(db: Database) -> Self {
        Self {
            bmi_service: BmiService::new(db),
        }
    }
}
