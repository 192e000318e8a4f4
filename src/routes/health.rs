//! Liveness endpoint.
//!
//! `GET /health` answers 200 with a fixed body whenever the process can
//! serve HTTP. Probes from orchestrators and load balancers hit this route.

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

/// Value of the `Allow` header on 405 responses from `/health`.
pub const ALLOWED_METHODS: &str = "GET";

/// Returns `ok`. Reads nothing from the request and touches no state, so it
/// cannot fail and is safe to call concurrently without limit.
pub async fn health() -> &'static str {
    "ok"
}

/// 405 for every method except GET, HEAD included.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ALLOWED_METHODS)],
    )
}
