//! OpenAI-compatible embeddings handler.
//!
//! The body is read as raw bytes and parsed as JSON whatever the
//! `Content-Type` says, so clients that omit the header still work.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Method;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

use embridge_core::upstream::UpstreamEmbedder;
use embridge_observe::genai_attrs::{GEN_AI_USAGE_INPUT_TOKENS, OP_EMBEDDINGS};
use embridge_types::embedding::{EmbeddingRequest, EmbeddingResponse, PROXY_MODEL};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /v1/embeddings
pub async fn create_embeddings(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EmbeddingResponse>, AppError> {
    let request_id = Uuid::now_v7();
    info!(%request_id, bytes = body.len(), "Received request for embeddings");

    let request: EmbeddingRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(%request_id, error = %e, "Error parsing request");
        AppError::BadRequest(format!("Error parsing request: {e}"))
    })?;

    let span = info_span!(
        "gen_ai.embeddings",
        %request_id,
        gen_ai.operation.name = OP_EMBEDDINGS,
        gen_ai.provider.name = state.translator.upstream().provider_name(),
        gen_ai.request.model = request.model.as_deref().unwrap_or_default(),
        gen_ai.response.model = PROXY_MODEL,
        input_count = request.input.len(),
        gen_ai.usage.input_tokens = tracing::field::Empty,
    );

    let response = state
        .translator
        .translate(request.input)
        .instrument(span.clone())
        .await
        .map_err(|e| {
            error!(%request_id, error = %e, "Embeddings request failed");
            AppError::from(e)
        })?;

    span.record(GEN_AI_USAGE_INPUT_TOKENS, response.usage.prompt_tokens);
    info!(
        %request_id,
        embeddings = response.data.len(),
        "Successfully processed request"
    );

    Ok(Json(response))
}

/// Any other method on /v1/embeddings.
pub async fn method_not_allowed(method: Method) -> AppError {
    warn!(%method, "Method not allowed on embeddings endpoint");
    AppError::MethodNotAllowed
}
