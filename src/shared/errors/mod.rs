// Shared errors
pub mod auth_error;
pub mod bmi_error;
pub mod token_error;

pub use auth_error::*;
pub use bmi_error::*;
pub use token_error::*;
