// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Creates one span per HTTP request carrying a request id taken from or added to headers

use axum::http::Request;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{MakeSpan, TraceLayer};
use tracing::Span;
use uuid::Uuid;

/// Header clients may use to supply their own correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id for a request: the client's `x-request-id` or a fresh one
#[must_use]
pub fn request_id_for<B>(request: &Request<B>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(|| format!("req_{}", Uuid::new_v4().simple()), ToOwned::to_owned)
}

/// Create a tracing span for HTTP requests
pub fn create_request_span(method: &str, path: &str, request_id: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id,
    )
}

/// Span factory plugged into `TraceLayer`
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        create_request_span(
            request.method().as_str(),
            request.uri().path(),
            &request_id_for(request),
        )
    }
}

/// HTTP trace layer with per-request spans
#[must_use]
pub fn with_request_tracing() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan>
{
    TraceLayer::new_for_http().make_span_with(RequestSpan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_from_header() {
        let request = Request::builder()
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(())
            .unwrap();
        assert_eq!(request_id_for(&request), "abc-123");
    }

    #[test]
    fn test_request_id_generated() {
        let request = Request::builder().body(()).unwrap();
        assert!(request_id_for(&request).starts_with("req_"));
    }
}
