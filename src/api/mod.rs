//! HTTP API server

use axum::{routing::get, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::Result;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state);

    Router::new()
        .route("/", get(handlers::root))
        .nest(
            "/api",
            Router::new()
                .route("/data", get(handlers::data))
                .route("/health", get(handlers::health))
                .route("/stocks", get(handlers::stocks))
                .route("/stocks/market-overview", get(handlers::market_overview)),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience helper building state straight from configuration
pub fn create_router_from_config(config: &AppConfig) -> Result<Router> {
    Ok(create_router(AppState::from_config(config)?))
}

/// One exact origin with credentials. Methods and request headers are mirrored
/// back, since wildcards are not allowed alongside credentials.
fn cors_layer(state: &AppState) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::exact(state.allowed_origin.clone()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
