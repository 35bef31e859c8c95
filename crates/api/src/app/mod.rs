//! HTTP API application wiring (Axum router).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs and mapping from domain reports
//! - `errors.rs`: consistent error responses
//! - `openapi.rs`: OpenAPI document for the public endpoints

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use shelflife_core::Clock;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod openapi;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// `clock` supplies "now" for every expiry computation.
pub fn build_app(clock: Arc<dyn Clock>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .route("/openapi.json", get(routes::system::openapi))
        .merge(routes::router().layer(Extension(clock)))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::request_logging)))
}
