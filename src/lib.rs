//! Payroll service: HTTP skeleton with a health endpoint.
//!
//! Startup loads an optional `.env` file, reads configuration from the
//! environment, opens the database pool and serves `GET /health`.

pub mod bootstrap;
pub mod config;
pub mod database;
pub mod env_file;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::StartupError;
