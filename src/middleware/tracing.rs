// ABOUTME: Request tracing helpers for correlation and structured logging
// ABOUTME: Builds the HTTP request span carrying the request id set by the request-id layer

use crate::constants::headers;
use http::Request;
use tracing::{field, info_span, Span};

/// Request id header value, if the request carries one
#[must_use]
pub fn request_id_of<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(headers::REQUEST_ID)
        .and_then(|value| value.to_str().ok())
}

/// Create a tracing span for an HTTP request
///
/// Used as the `TraceLayer` span factory. The request id is filled in by
/// `SetRequestIdLayer`, which runs before tracing.
pub fn create_request_span<B>(request: &Request<B>) -> Span {
    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = request_id_of(request).unwrap_or("-"),
        status_code = field::Empty,
        duration_ms = field::Empty,
    )
}
