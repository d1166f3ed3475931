pub mod bmi_repository;
pub mod user_repository;

pub use bmi_repository::BmiRepository;
pub use user_repository::{UserCounts, UserRepository};
