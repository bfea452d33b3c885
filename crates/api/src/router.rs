//! HTTP entry point for the catalog: the health probe and every catalog
//! route at the root path, wrapped in one middleware stack.
//!
//! `main.rs` serves this router and the integration tests drive it through
//! `oneshot`, so both exercise identical request handling.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Assemble the catalog [`Router`] over `state`.
///
/// Layers run outermost first on a request:
///
/// | Layer              | Effect on a catalog request                          |
/// |--------------------|------------------------------------------------------|
/// | CORS               | answers browser preflights for `config.cors_origins` |
/// | SetRequestId       | stamps an `x-request-id` UUID when none is sent      |
/// | Trace              | one INFO span per request, INFO line per response    |
/// | PropagateRequestId | copies `x-request-id` onto the response              |
/// | Timeout            | 408 once `config.request_timeout_secs` elapses       |
/// | Compression        | gzips film listings for clients that accept it       |
/// | CatchPanic         | turns a handler panic into a 500                     |
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// CORS policy for the catalog front end: the configured origins may read
/// and write catalog entities with JSON bodies. No credentials are involved.
///
/// An origin that does not parse as a header value aborts start-up.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
