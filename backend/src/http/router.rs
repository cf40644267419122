//! Router configuration for the HTTP API.
//!
//! Sets up all routes and middleware (CORS, compression, tracing, body limit)
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, put},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Default request body limit (10 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Create the main application router with the default body limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_limit(state, DEFAULT_BODY_LIMIT)
}

/// Create the main application router with all routes and middleware.
pub fn create_router_with_limit(state: AppState, body_limit: usize) -> Router {
    // Permissive CORS: the statistics chart is served from a separate origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/statistics", get(handlers::get_statistics))
        .route("/statistics/categories", get(handlers::list_categories))
        .route(
            "/statistics/chart",
            get(handlers::get_chart).post(handlers::compute_chart),
        )
        .route(
            "/statistics/{category}",
            put(handlers::put_category).delete(handlers::delete_category),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
