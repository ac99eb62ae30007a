//! API Routes
//!
//! Configures the Axum router. The record lives at the root route; the
//! transport status code always mirrors the envelope's `responseStatus`.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, health_handler, method_not_allowed_handler, read_handler, write_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Read the stored record
/// - `POST /` - Replace the record (optional `expire` field schedules TTL)
/// - `DELETE /` - Remove the record and cancel its timer
/// - any other verb on `/` - 405 envelope
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/",
            get(read_handler)
                .post(write_handler)
                .delete(clear_handler)
                .fallback(method_not_allowed_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
