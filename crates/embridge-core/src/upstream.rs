//! UpstreamEmbedder trait definition.
//!
//! The port through which the translator reaches the real embeddings
//! provider. Implementations (e.g. the OVH batch client) live in
//! embridge-infra; tests use in-memory mocks.

use embridge_types::embedding::EmbeddingVector;
use embridge_types::error::UpstreamError;

/// Trait for upstream batch embedding backends.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition). Wrap in
/// [`crate::box_upstream::BoxUpstream`] for dynamic dispatch.
pub trait UpstreamEmbedder: Send + Sync {
    /// Provider name used in tracing (e.g., "ovh").
    fn provider_name(&self) -> &str;

    /// Embed one batch of texts with a single upstream call.
    ///
    /// Must return the vectors in the same order as `batch`. The translator
    /// checks the count; implementations do not need to.
    fn embed_batch(
        &self,
        batch: &[String],
    ) -> impl std::future::Future<Output = Result<Vec<EmbeddingVector>, UpstreamError>> + Send;
}
