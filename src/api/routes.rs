//! API route configuration.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;

/// Create the API router with all routes and middleware.
pub fn create_router(state: Arc<AppState>) -> Router {
    // The marketing site is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let contact = Router::new()
        .route("/", get(handlers::get_contact_info))
        .route("/consultation", post(handlers::submit_consultation))
        .route("/consultation-requests", get(handlers::list_consultations))
        .route(
            "/consultation-requests/:id",
            get(handlers::get_consultation),
        )
        .route("/quote", post(handlers::submit_quote))
        .route("/quote-requests", get(handlers::list_quotes))
        .route("/quote-requests/:id", get(handlers::get_quote));

    Router::new()
        .nest("/api/contact", contact)
        // Operational endpoints live outside the contact prefix
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}
