//! HTTP layer: one OpenAI-compatible endpoint at `/v1/embeddings`.
//!
//! Responses are OpenAI-shaped JSON on success and plain text on error.

pub mod error;
pub mod handlers;
pub mod router;
