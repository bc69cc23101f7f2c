/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the public and token-protected route tables into a single Axum
 * router, layers CORS on top and installs the 404 fallback.
 *
 * # CORS
 *
 * When `FRONTEND_ORIGIN` is configured the layer allows exactly that
 * origin with credentials and the headers the frontend sends
 * (`Origin`, `X-Requested-With`, `Content-Type`, `Accept`). Without a
 * configured origin the layer is permissive, which suits local
 * development.
 */

use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::routes::api_routes::{protected_routes, public_routes};
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state (pool, optional mailer, config)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(state: AppState) -> Router<()> {
    let cors = build_cors(&state.config);

    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .layer(cors)
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Recurso no encontrado" })),
            )
        })
        .with_state(state)
}

/// Build the CORS layer from the configured frontend origin.
fn build_cors(config: &ServerConfig) -> CorsLayer {
    match config.frontend_origin.as_deref() {
        Some(origin) => match origin.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new()
                .allow_origin(origin)
                .allow_credentials(true)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([
                    header::ORIGIN,
                    HeaderName::from_static("x-requested-with"),
                    header::CONTENT_TYPE,
                    header::ACCEPT,
                    header::AUTHORIZATION,
                ]),
            Err(_) => {
                tracing::warn!("Invalid FRONTEND_ORIGIN value, falling back to permissive CORS");
                CorsLayer::permissive()
            }
        },
        None => CorsLayer::permissive(),
    }
}
