use std::time::Duration;

use axum::{body::Body, http::Request, response::Response};
use tracing::Span;
use uuid::Uuid;

/// Attach a fresh request id to every request span.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        tracing::Level::INFO,
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::info!("started processing request");
}

pub fn on_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status();
    if status.is_server_error() {
        tracing::error!(%status, ?latency, "finished processing request");
    } else {
        tracing::info!(%status, ?latency, "finished processing request");
    }
}
