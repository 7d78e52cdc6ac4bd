//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: storage connectivity
//! - `/api/users*`       - User CRUD
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - One allowed origin
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and middleware without path normalization.
///
/// Useful for in-process testing, where the router is driven directly.
pub fn router(state: AppState, cors_origin: HeaderValue, cors_max_age: Duration) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::user_routes())
        .with_state(state)
        .layer(cors::layer(cors_origin, cors_max_age))
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origin` - the single origin allowed to call the API from a browser
/// - `cors_max_age` - how long browsers may cache preflight responses
pub fn app_router(
    state: AppState,
    cors_origin: HeaderValue,
    cors_max_age: Duration,
) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, cors_origin, cors_max_age))
}
