//! HTTP route table.
//!
//! The router is built once at startup and moved into the server; nothing
//! mutates it afterwards. Unknown paths get the router's default 404. Any
//! method other than GET on `/health` gets 405 with `Allow: GET`; HEAD is
//! rejected explicitly because axum would otherwise answer it with the GET
//! handler.
//!
//! Every request, matched or not, is logged through [`request_id_layer`].

pub mod health;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes.
pub fn create_router() -> Router {
    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route(
            "/health",
            get(health::health)
                .head(health::method_not_allowed)
                .fallback(health::method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        // Outermost: one span and one completion line per request
        .layer(middleware::from_fn(request_id_layer))
}
