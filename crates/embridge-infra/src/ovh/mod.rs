//! OVH AI Endpoints batch embeddings adapter.
//!
//! The `batch_text2vec` API takes a bare JSON array of strings and answers
//! with a bare JSON array of float arrays, one per input, in input order.

pub mod client;

pub use client::OvhBatchClient;
