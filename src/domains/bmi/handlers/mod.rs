pub mod bmi_handler;
