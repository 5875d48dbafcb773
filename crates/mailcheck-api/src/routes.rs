//! API routes

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use mailcheck_common::{Config, Error, Result};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// Create the API router
pub fn create_router(state: AppState, config: &Config) -> Result<Router> {
    let state = Arc::new(state);

    let origin = HeaderValue::from_str(&config.cors.allowed_origin).map_err(|e| {
        Error::Config(format!(
            "Invalid CORS origin {:?}: {}",
            config.cors.allowed_origin, e
        ))
    })?;

    let router = Router::new()
        .route(&config.server.check_path, post(handlers::check_domain))
        .route("/health", get(handlers::health))
        .with_state(state)
        // Routed paths only; unmatched paths fall through to 404
        .route_layer(cors_layer(origin.clone()))
        // Same values on every response, preflight and errors included
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            origin,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(TraceLayer::new_for_http());

    Ok(router)
}

/// CORS handling; `OPTIONS` on a routed path is answered here with an empty 200
fn cors_layer(origin: HeaderValue) -> CorsLayer {
    let allow_origin = if origin == "*" {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::exact(origin)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
