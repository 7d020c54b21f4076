//! BoxUpstream -- object-safe dynamic dispatch wrapper for UpstreamEmbedder.
//!
//! 1. `UpstreamDyn` is an object-safe mirror of the trait with boxed futures
//! 2. Blanket-impl `UpstreamDyn` for all `T: UpstreamEmbedder`
//! 3. `BoxUpstream` wraps `Box<dyn UpstreamDyn>` and implements
//!    `UpstreamEmbedder` itself, so it plugs straight into the translator

use std::future::Future;
use std::pin::Pin;

use embridge_types::embedding::EmbeddingVector;
use embridge_types::error::UpstreamError;

use super::upstream::UpstreamEmbedder;

type BatchFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<EmbeddingVector>, UpstreamError>> + Send + 'a>>;

/// Object-safe version of [`UpstreamEmbedder`] with boxed futures.
pub trait UpstreamDyn: Send + Sync {
    fn provider_name_dyn(&self) -> &str;

    fn embed_batch_boxed<'a>(&'a self, batch: &'a [String]) -> BatchFuture<'a>;
}

impl<T: UpstreamEmbedder> UpstreamDyn for T {
    fn provider_name_dyn(&self) -> &str {
        self.provider_name()
    }

    fn embed_batch_boxed<'a>(&'a self, batch: &'a [String]) -> BatchFuture<'a> {
        Box::pin(self.embed_batch(batch))
    }
}

/// Type-erased upstream, selected at startup.
///
/// Lets the HTTP layer hold one concrete translator type whether it is wired
/// to the OVH client or to a test double.
pub struct BoxUpstream {
    inner: Box<dyn UpstreamDyn>,
}

impl BoxUpstream {
    pub fn new<T: UpstreamEmbedder + 'static>(upstream: T) -> Self {
        Self {
            inner: Box::new(upstream),
        }
    }
}

impl UpstreamEmbedder for BoxUpstream {
    fn provider_name(&self) -> &str {
        self.inner.provider_name_dyn()
    }

    async fn embed_batch(&self, batch: &[String]) -> Result<Vec<EmbeddingVector>, UpstreamError> {
        self.inner.embed_batch_boxed(batch).await
    }
}
