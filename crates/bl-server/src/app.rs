//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;
use crate::static_files;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/pages/", get(handlers::pages::get_root_page))
        .route("/api/pages/{*path}", get(handlers::pages::get_page))
        .route(bl_site::SAMPLES_ENDPOINT, get(handlers::samples::get_sample));

    let [csp, nosniff, frame_options, referrer] = security::layers();

    Router::new()
        .merge(api_routes)
        .route("/assets/{*path}", get(static_files::serve_asset))
        .fallback(handlers::document::get_document)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(csp)
                .layer(nosniff)
                .layer(frame_options)
                .layer(referrer),
        )
        .with_state(state)
}
