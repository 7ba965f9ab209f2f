//! API Routes
//!
//! Configures the Axum router with all advisory server endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, category_handler, health_handler, priority_handler,
    risk_analysis_handler, summarize_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin so the single-page client can call it directly
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let ai = Router::new()
        .route("/risk-analysis", post(risk_analysis_handler))
        .route("/priority", post(priority_handler))
        .route("/category", post(category_handler))
        .route("/summarize", post(summarize_handler))
        .route("/cache/stats", get(cache_stats_handler));

    Router::new()
        .nest("/api/ai", ai)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
