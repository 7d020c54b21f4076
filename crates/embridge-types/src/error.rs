use thiserror::Error;

/// Errors raised while building [`crate::config::ProxyConfig`] at startup.
///
/// Any of these prevents the process from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("invalid {var} '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors from a single upstream batch call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream client could not be constructed.
    #[error("failed to build upstream client: {0}")]
    Setup(String),

    /// The batch could not be encoded as a JSON array of strings.
    #[error("error serializing batch: {0}")]
    Serialize(String),

    /// Network-level failure (connect, TLS, reading the body).
    #[error("error calling upstream API: {0}")]
    Transport(String),

    /// Upstream answered with a status other than 200.
    #[error("{status}, response: {body}")]
    Status { status: u16, body: String },

    /// Upstream body was not a JSON array of float arrays.
    #[error("error decoding upstream response: {0}")]
    Decode(String),

    /// Upstream returned a different number of vectors than texts sent.
    #[error("upstream returned {actual} embeddings for {expected} inputs")]
    CountMismatch { expected: usize, actual: usize },
}

impl UpstreamError {
    /// Failure to reach the upstream at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, UpstreamError::Transport(_))
    }

    /// Upstream was reached but answered with something unusable.
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            UpstreamError::Status { .. }
                | UpstreamError::Decode(_)
                | UpstreamError::CountMismatch { .. }
        )
    }
}

/// Failure of a whole translation: the first failing batch and its position.
///
/// Batches after the failing one are never attempted and no partial result
/// is kept.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error(
        "Error from upstream API (batch {batch_number}/{batch_count} starting at index {batch_start}): {source}"
    )]
    Upstream {
        /// 1-based position of the failing batch.
        batch_number: usize,
        batch_count: usize,
        /// Index in the input of the batch's first text.
        batch_start: usize,
        source: UpstreamError,
    },
}

impl TranslateError {
    /// The upstream error behind this failure.
    pub fn upstream(&self) -> &UpstreamError {
        match self {
            TranslateError::Upstream { source, .. } => source,
        }
    }
}
