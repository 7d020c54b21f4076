//! BatchTranslator -- turns one embeddings request into sequential upstream
//! batch calls and a single OpenAI-shaped response.
//!
//! Batches are sent strictly one after another, in input order. The first
//! failing batch aborts the whole translation: later batches are never sent
//! and nothing already received is returned.

use std::num::NonZeroUsize;

use tracing::{debug, error, info};

use embridge_types::embedding::{EmbeddingResponse, EmbeddingVector};
use embridge_types::error::{TranslateError, UpstreamError};
use embridge_types::input::EmbeddingInput;

use crate::batch::{Batch, batch_count, partition};
use crate::response::assemble_response;
use crate::upstream::UpstreamEmbedder;

/// Translates embeddings requests onto a batch-oriented upstream.
///
/// Holds no per-request state, so one instance is shared by all requests.
pub struct BatchTranslator<U> {
    upstream: U,
    batch_size: NonZeroUsize,
}

impl<U: UpstreamEmbedder> BatchTranslator<U> {
    pub fn new(upstream: U, batch_size: NonZeroUsize) -> Self {
        Self {
            upstream,
            batch_size,
        }
    }

    pub fn batch_size(&self) -> NonZeroUsize {
        self.batch_size
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    /// Normalize `input`, embed every text, and assemble the response.
    pub async fn translate(
        &self,
        input: EmbeddingInput,
    ) -> Result<EmbeddingResponse, TranslateError> {
        let texts = input.into_texts();
        let vectors = self.embed_texts(&texts).await?;
        Ok(assemble_response(vectors, &texts))
    }

    /// Embed `texts` batch by batch, returning one vector per text in order.
    pub async fn embed_texts(
        &self,
        texts: &[String],
    ) -> Result<Vec<EmbeddingVector>, TranslateError> {
        let batch_count = batch_count(texts.len(), self.batch_size);
        let mut vectors = Vec::with_capacity(texts.len());

        for batch in partition(texts, self.batch_size) {
            info!(
                provider = self.upstream.provider_name(),
                batch_number = batch.number(),
                batch_count,
                batch_size = batch.len(),
                "Processing batch {}/{}, size: {}",
                batch.number(),
                batch_count,
                batch.len()
            );

            match self.embed_batch(&batch).await {
                Ok(batch_vectors) => {
                    debug!(
                        batch_number = batch.number(),
                        batch_count,
                        batch_size = batch.len(),
                        "Batch embedded"
                    );
                    vectors.extend(batch_vectors);
                }
                Err(source) => {
                    error!(
                        batch_number = batch.number(),
                        batch_count,
                        batch_size = batch.len(),
                        batch_start = batch.start,
                        error = %source,
                        "Batch failed, aborting request"
                    );
                    return Err(TranslateError::Upstream {
                        batch_number: batch.number(),
                        batch_count,
                        batch_start: batch.start,
                        source,
                    });
                }
            }
        }

        Ok(vectors)
    }

    async fn embed_batch(&self, batch: &Batch<'_>) -> Result<Vec<EmbeddingVector>, UpstreamError> {
        let vectors = self.upstream.embed_batch(batch.texts).await?;
        if vectors.len() != batch.len() {
            return Err(UpstreamError::CountMismatch {
                expected: batch.len(),
                actual: vectors.len(),
            });
        }
        Ok(vectors)
    }
}
