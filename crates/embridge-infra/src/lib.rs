//! Infrastructure layer for embridge.
//!
//! Implements the `UpstreamEmbedder` port from `embridge-core` against the
//! OVH AI Endpoints batch embeddings API, and loads [`ProxyConfig`] from the
//! process environment (plus an optional `.env` file).
//!
//! [`ProxyConfig`]: embridge_types::config::ProxyConfig

pub mod config;
pub mod ovh;
