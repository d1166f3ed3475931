// BMI domain: per-user BMI tracking and admin reporting
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
