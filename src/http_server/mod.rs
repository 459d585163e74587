//! # HTTP Server Module
//!
//! Axum server exposing query-validated routes.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/users/:id` - Users lookup, query string checked against `age`, `status`, `search`
//!
//! A request whose query fails validation gets `400 Bad Request` with
//! `{"errors": [{"parameter", "value", "message"}, ...]}`.

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod users_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ErrorsResponse, QueryRejection};
pub use server::HttpServer;
pub use users_routes::{users_rules, UsersState};
