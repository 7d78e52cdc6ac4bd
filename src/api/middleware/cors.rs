//! Cross-origin access for the single configured front-end origin.

use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Creates a CORS layer allowing one origin.
///
/// # Policy
///
/// - **Origin**: exactly `origin`
/// - **Methods**: `GET`, `POST`, `PUT`, `DELETE`
/// - **Headers**: `Content-Type`
/// - **Preflight cache**: `max_age`
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api_routes())
///     .layer(cors::layer(HeaderValue::from_static("http://localhost:3000"), Duration::from_secs(3600)));
/// ```
pub fn layer(origin: HeaderValue, max_age: Duration) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(max_age)
}
