//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Log each request with its status and latency.
///
/// Client errors (rejected logins, invalid forms) are routine and logged at
/// info; only server errors are warnings.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status();

    if status.is_server_error() {
        warn!(%method, %path, %status, latency_ms, "Request failed");
    } else if status.is_client_error() {
        info!(%method, %path, %status, latency_ms, "Request rejected");
    } else {
        debug!(%method, %path, %status, latency_ms, "Request completed");
    }

    response
}
