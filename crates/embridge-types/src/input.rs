//! The dynamic `input` field of an embeddings request.
//!
//! OpenAI clients send either a single string or an array, but nothing stops
//! them from sending numbers, objects or `null`. The value is captured as-is
//! and resolved once into an ordered list of texts by [`EmbeddingInput::into_texts`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// The `input` value of an embeddings request.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbeddingInput {
    /// A single string.
    Scalar(String),
    /// An array of arbitrary values; each element becomes one text.
    List(Vec<Value>),
    /// Any other shape (object, number, boolean, null); becomes one text.
    Other(Value),
}

impl EmbeddingInput {
    /// Resolve into the ordered texts to embed.
    ///
    /// Never fails: non-string values are rendered with [`stringify`].
    pub fn into_texts(self) -> Vec<String> {
        match self {
            EmbeddingInput::Scalar(text) => vec![text],
            EmbeddingInput::List(items) => items.into_iter().map(into_text).collect(),
            EmbeddingInput::Other(value) => vec![into_text(value)],
        }
    }

    /// Number of texts this input resolves to.
    pub fn len(&self) -> usize {
        match self {
            EmbeddingInput::List(items) => items.len(),
            _ => 1,
        }
    }

    /// True only for an empty array.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Textual representation of a JSON value.
///
/// Strings are returned verbatim (no surrounding quotes); every other value
/// is rendered as compact JSON, so `42` becomes `"42"`, `null` becomes
/// `"null"` and `{"a":1}` becomes `"{\"a\":1}"`.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn into_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => stringify(&other),
    }
}

impl From<Value> for EmbeddingInput {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => EmbeddingInput::Scalar(text),
            Value::Array(items) => EmbeddingInput::List(items),
            other => EmbeddingInput::Other(other),
        }
    }
}

impl From<&str> for EmbeddingInput {
    fn from(text: &str) -> Self {
        EmbeddingInput::Scalar(text.to_string())
    }
}

impl From<Vec<String>> for EmbeddingInput {
    fn from(texts: Vec<String>) -> Self {
        EmbeddingInput::List(texts.into_iter().map(Value::String).collect())
    }
}

/// A missing `input` field behaves like an explicit `null`.
impl Default for EmbeddingInput {
    fn default() -> Self {
        EmbeddingInput::Other(Value::Null)
    }
}

impl<'de> Deserialize<'de> for EmbeddingInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(EmbeddingInput::from)
    }
}

impl Serialize for EmbeddingInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            EmbeddingInput::Scalar(text) => serializer.serialize_str(text),
            EmbeddingInput::List(items) => items.serialize(serializer),
            EmbeddingInput::Other(value) => value.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn texts(value: Value) -> Vec<String> {
        EmbeddingInput::from(value).into_texts()
    }

    #[test]
    fn test_scalar_string_is_single_text() {
        assert_eq!(texts(json!("hello world")), vec!["hello world"]);
    }

    #[test]
    fn test_list_of_strings_kept_verbatim() {
        assert_eq!(texts(json!(["a", " b ", ""])), vec!["a", " b ", ""]);
    }

    #[test]
    fn test_mixed_list_stringifies_non_strings() {
        let result = texts(json!(["a", 1, 2.5, true, null, {"k": "v"}, [1, 2]]));
        assert_eq!(
            result,
            vec!["a", "1", "2.5", "true", "null", r#"{"k":"v"}"#, "[1,2]"]
        );
    }

    #[test]
    fn test_empty_list_yields_no_texts() {
        let input = EmbeddingInput::from(json!([]));
        assert!(input.is_empty());
        assert!(input.into_texts().is_empty());
    }

    #[test]
    fn test_other_shapes_yield_one_text() {
        assert_eq!(texts(json!(42)), vec!["42"]);
        assert_eq!(texts(json!(false)), vec!["false"]);
        assert_eq!(texts(Value::Null), vec!["null"]);
        assert_eq!(texts(json!({"text": "x"})), vec![r#"{"text":"x"}"#]);
    }

    #[test]
    fn test_len_matches_texts() {
        for value in [json!("x"), json!(["a", "b", 3]), json!(7), Value::Null] {
            let input = EmbeddingInput::from(value);
            let expected = input.len();
            assert_eq!(input.into_texts().len(), expected);
        }
    }

    #[test]
    fn test_stringify_does_not_quote_strings() {
        assert_eq!(stringify(&json!("quoted?")), "quoted?");
        assert_eq!(stringify(&json!(-3)), "-3");
    }

    #[test]
    fn test_deserialize_variants() {
        let scalar: EmbeddingInput = serde_json::from_str(r#""hi""#).unwrap();
        assert_eq!(scalar, EmbeddingInput::Scalar("hi".to_string()));

        let list: EmbeddingInput = serde_json::from_str(r#"["a", 1]"#).unwrap();
        assert_eq!(list, EmbeddingInput::List(vec![json!("a"), json!(1)]));

        let other: EmbeddingInput = serde_json::from_str("null").unwrap();
        assert_eq!(other, EmbeddingInput::Other(Value::Null));
    }

    #[test]
    fn test_serialize_preserves_shape() {
        let input = EmbeddingInput::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(serde_json::to_value(&input).unwrap(), json!(["a", "b"]));
        assert_eq!(
            serde_json::to_value(EmbeddingInput::from("x")).unwrap(),
            json!("x")
        );
    }
}
