// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request spans with correlation ids and the CORS layer

pub mod cors;
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{create_request_span, request_id_for, with_request_tracing, RequestSpan};
