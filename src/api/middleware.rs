//! API middleware (request logging).

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Request logging middleware: one line per request with method, path,
/// status, and latency.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    // Health probes fire constantly on hosted deployments; keep them
    // out of the log.
    if request.uri().path() == "/health" {
        return next.run(request).await;
    }

    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    info!(
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        latency_ms = %start.elapsed().as_millis(),
        "Request completed"
    );

    response
}
