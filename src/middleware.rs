//! Per-request logging span.
//!
//! Each request runs inside a `request` span carrying a fresh UUID v4, the
//! method, the raw path and the matched route template (`-` when no route
//! matched). One completion line is logged per request, at a level chosen
//! from the status: router rejections (404, 405) are client noise and go
//! to debug, server errors go to warn.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, Level};
use uuid::Uuid;

/// Log level for the completion line of a request that ended in `status`.
pub fn completion_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::WARN
    } else if status.is_client_error() {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Wraps the request in a span tagged with a new request ID.
///
/// Installed with `Router::layer`, so it also sees the router's own 404 and
/// 405 responses.
pub async fn request_id_layer(request: Request, next: Next) -> Response {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| "-".to_owned());

    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
        route = %route,
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;
        let status = response.status().as_u16();
        let duration_ms = start.elapsed().as_millis() as u64;

        let level = completion_level(response.status());
        if level == Level::WARN {
            tracing::warn!(status, duration_ms, "Request failed");
        } else if level == Level::DEBUG {
            tracing::debug!(status, duration_ms, "Request rejected");
        } else {
            tracing::info!(status, duration_ms, "Request completed");
        }

        response
    }
    .instrument(span)
    .await
}
