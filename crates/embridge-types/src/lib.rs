//! Shared types for embridge.
//!
//! The OpenAI-shaped embeddings schema served to clients, the dynamic
//! `input` value and its normalization into texts, the immutable proxy
//! configuration, and the error enums used across the workspace.
//!
//! No IO dependencies -- only serde, serde_json, thiserror, secrecy.

pub mod config;
pub mod embedding;
pub mod error;
pub mod input;
