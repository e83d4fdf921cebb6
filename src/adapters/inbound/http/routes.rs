//! Relay route definitions

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{handlers, middleware::logging_middleware, state::AppState};

/// Relay routes, all under the `/api` prefix plus a health probe
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/init", post(handlers::init_project))
        .route("/api/component/create", post(handlers::create_component))
        .route("/api/projects", get(handlers::list_projects))
}

/// Complete router with logging, tracing and CORS layers applied
pub fn build_router(state: AppState) -> Router {
    api_routes()
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
