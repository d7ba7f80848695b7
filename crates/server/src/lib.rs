pub mod appointments;
pub mod config;
pub mod error;
pub mod openapi;
pub mod routes;
pub mod settings;
pub mod state;
pub mod validation;
