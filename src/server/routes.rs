use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Create the application router
///
/// # Routes
///
/// - `GET /` - Index page (falls back to inline HTML)
/// - `GET /health` - Liveness probe
/// - `POST /analyze` - Score a `{"text": ...}` payload
///
/// Request bodies are unbounded unless `AppState::max_body_bytes` is set.
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = match state.max_body_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/analyze", post(handlers::analyze))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
