//! Axum router: the embeddings route, a health check and request tracing.

use axum::Router;
use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Upper bound on an embeddings request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/embeddings",
            post(handlers::embeddings::create_embeddings)
                .fallback(handlers::embeddings::method_not_allowed),
        )
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "batch_size": state.config.batch_size.get(),
    }))
}
