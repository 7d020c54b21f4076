//! Observability for embridge: tracing subscriber setup and the GenAI
//! semantic-convention attribute names used on request spans.

pub mod genai_attrs;
pub mod tracing_setup;
