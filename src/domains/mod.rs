pub mod auth;
pub mod bmi;
