pub mod bmi_service;
pub mod calculator;
pub mod state;

pub use bmi_service::BmiService;
pub use state::BmiState;
