//! HTTP request handlers.

pub mod embeddings;
