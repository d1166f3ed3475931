// Auth domain: registration, login, JWT issue/verify, account management
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
