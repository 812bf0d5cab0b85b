//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared item store and its locking
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request parsing and response bodies
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over a fresh, empty store.
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::AppServices::new()))
}

/// Build the router over caller-owned services, so the store can be inspected
/// alongside HTTP traffic.
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(services)),
        )
}
