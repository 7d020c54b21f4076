//! Batch translation logic for embridge.
//!
//! Splits normalized input texts into fixed-size batches, sends them one at a
//! time through an [`upstream::UpstreamEmbedder`], and assembles the
//! OpenAI-shaped response. Depends only on `embridge-types` -- the HTTP
//! client implementing the upstream port lives in `embridge-infra`.

pub mod batch;
pub mod box_upstream;
pub mod response;
pub mod translator;
pub mod upstream;
pub mod usage;
