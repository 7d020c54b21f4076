//! OpenAI-compatible embeddings request and response schema.
//!
//! This is the shape served on `POST /v1/embeddings`:
//! ```json
//! {
//!   "data": [{ "embedding": [0.1, 0.2], "index": 0, "object": "embedding" }],
//!   "model": "ovh-embeddings",
//!   "object": "list",
//!   "usage": { "prompt_tokens": 2, "total_tokens": 2 }
//! }
//! ```

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::input::EmbeddingInput;

/// Model label reported in every response, whatever the client asked for.
pub const PROXY_MODEL: &str = "ovh-embeddings";

/// `object` value of the top-level response.
pub const LIST_OBJECT: &str = "list";

/// `object` value of each entry in `data`.
pub const EMBEDDING_OBJECT: &str = "embedding";

/// One embedding vector. Dimensions are whatever the upstream model returns.
pub type EmbeddingVector = Vec<f64>;

/// Request body of `POST /v1/embeddings`.
///
/// Only a JSON object is accepted. Unknown keys are ignored and a repeated
/// key keeps its last value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmbeddingRequest {
    /// Text(s) to embed. Missing is treated as `null`.
    pub input: EmbeddingInput,

    /// Accepted for compatibility and otherwise ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl<'de> Deserialize<'de> for EmbeddingRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RequestVisitor)
    }
}

struct RequestVisitor;

impl<'de> Visitor<'de> for RequestVisitor {
    type Value = EmbeddingRequest;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an embeddings request object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut request = EmbeddingRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "input" => request.input = map.next_value()?,
                "model" => request.model = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(request)
    }
}

/// A single embedding entry, index-aligned with the request input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingData {
    pub embedding: EmbeddingVector,
    pub index: usize,
    pub object: String,
}

/// Approximate token accounting (whitespace-delimited words).
///
/// `prompt_tokens` and `total_tokens` are always equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingUsage {
    pub prompt_tokens: usize,
    pub total_tokens: usize,
}

impl EmbeddingUsage {
    /// Usage where prompt and total both equal `tokens`.
    pub fn from_tokens(tokens: usize) -> Self {
        Self {
            prompt_tokens: tokens,
            total_tokens: tokens,
        }
    }
}

/// Response body of `POST /v1/embeddings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,
    pub model: String,
    pub object: String,
    pub usage: EmbeddingUsage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_with_string_input() {
        let req: EmbeddingRequest =
            serde_json::from_str(r#"{"input": "hello", "model": "text-embedding-3-small"}"#)
                .unwrap();
        assert_eq!(req.input, EmbeddingInput::Scalar("hello".to_string()));
        assert_eq!(req.model.as_deref(), Some("text-embedding-3-small"));
    }

    #[test]
    fn test_request_missing_input_defaults_to_null() {
        let req: EmbeddingRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.input, EmbeddingInput::Other(serde_json::Value::Null));
        assert!(req.model.is_none());
    }

    #[test]
    fn test_request_rejects_non_object_body() {
        for body in [
            r#"["a", "b"]"#,
            r#"["hello world", "m"]"#,
            r#"[["a", "b"]]"#,
            r#""hello""#,
            "42",
            "null",
            "not json",
        ] {
            assert!(
                serde_json::from_str::<EmbeddingRequest>(body).is_err(),
                "{body} should be rejected"
            );
        }
    }

    #[test]
    fn test_request_ignores_unknown_keys() {
        let req: EmbeddingRequest = serde_json::from_str(
            r#"{"encoding_format": "float", "input": ["a"], "user": {"id": 7}}"#,
        )
        .unwrap();
        assert_eq!(req.input, EmbeddingInput::List(vec![json!("a")]));
        assert!(req.model.is_none());
    }

    #[test]
    fn test_request_null_model_is_none() {
        let req: EmbeddingRequest =
            serde_json::from_str(r#"{"input": "x", "model": null}"#).unwrap();
        assert!(req.model.is_none());
    }

    #[test]
    fn test_request_rejects_non_string_model() {
        assert!(serde_json::from_str::<EmbeddingRequest>(r#"{"input": "x", "model": 5}"#).is_err());
    }

    #[test]
    fn test_request_serializes_without_absent_model() {
        let req = EmbeddingRequest {
            input: EmbeddingInput::from("x"),
            model: None,
        };
        assert_eq!(serde_json::to_value(&req).unwrap(), json!({"input": "x"}));
    }

    #[test]
    fn test_response_wire_shape() {
        let response = EmbeddingResponse {
            data: vec![EmbeddingData {
                embedding: vec![0.5, -1.0],
                index: 0,
                object: EMBEDDING_OBJECT.to_string(),
            }],
            model: PROXY_MODEL.to_string(),
            object: LIST_OBJECT.to_string(),
            usage: EmbeddingUsage::from_tokens(3),
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "data": [{"embedding": [0.5, -1.0], "index": 0, "object": "embedding"}],
                "model": "ovh-embeddings",
                "object": "list",
                "usage": {"prompt_tokens": 3, "total_tokens": 3}
            })
        );
    }
}
