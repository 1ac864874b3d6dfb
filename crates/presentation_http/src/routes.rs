//! Route definitions

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use infrastructure::ServerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::{
    handlers,
    middleware::{REQUEST_ID_HEADER, RequestIdLayer},
    openapi::create_openapi_routes,
    state::AppState,
};

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::index))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Weather API
        .route("/api/weather", get(handlers::weather::current_weather))
        .route("/api/forecast", get(handlers::weather::forecast))
        .route(
            "/api/city-suggestions",
            get(handlers::weather::city_suggestions),
        )
        .merge(create_openapi_routes())
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Create the router wrapped in request-id, tracing and CORS middleware
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.server);

    create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
}

/// CORS policy: any origin unless `allowed_origins` is configured
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([REQUEST_ID_HEADER.clone()]);

    if server.allows_any_origin() {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|_| warn!(origin = %origin, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();
    base.allow_origin(origins)
}
