//! Approximate token accounting.
//!
//! There is no tokenizer here: a "token" is a whitespace-delimited word.

use embridge_types::embedding::EmbeddingUsage;

/// Number of whitespace-delimited words in `text`.
pub fn approximate_tokens(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Usage over all `texts`; prompt and total tokens are the same sum.
pub fn usage_for(texts: &[String]) -> EmbeddingUsage {
    let tokens = texts.iter().map(|text| approximate_tokens(text)).sum();
    EmbeddingUsage::from_tokens(tokens)
}
