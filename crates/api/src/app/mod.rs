//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: seed → repositories → pricing → lister wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: query parameters and their mapping to search criteria
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(Arc::new(services)))
}
