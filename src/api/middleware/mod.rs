//! HTTP middleware for request processing.
//!
//! Provides cross-origin and observability middleware.

pub mod cors;
pub mod tracing;
