//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered list page and form handlers
//! - Request tracing
//! - Graceful shutdown
//! - HTML error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
