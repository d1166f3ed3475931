// BMI domain models
pub mod bmi;

pub use bmi::*;
