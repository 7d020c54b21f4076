//! Assembly of the OpenAI-shaped embeddings response.

use embridge_types::embedding::{
    EMBEDDING_OBJECT, EmbeddingData, EmbeddingResponse, EmbeddingVector, LIST_OBJECT, PROXY_MODEL,
};

use crate::usage::usage_for;

/// Build the response from the concatenated vectors and the input texts.
///
/// `vectors[i]` becomes `data[i]` with `index == i`. Usage is computed over
/// `texts`, independent of the vectors.
pub fn assemble_response(vectors: Vec<EmbeddingVector>, texts: &[String]) -> EmbeddingResponse {
    let data = vectors
        .into_iter()
        .enumerate()
        .map(|(index, embedding)| EmbeddingData {
            embedding,
            index,
            object: EMBEDDING_OBJECT.to_string(),
        })
        .collect();

    EmbeddingResponse {
        data,
        model: PROXY_MODEL.to_string(),
        object: LIST_OBJECT.to_string(),
        usage: usage_for(texts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_indexes_in_order() {
        let texts = vec!["first text".to_string(), "second".to_string()];
        let response = assemble_response(vec![vec![1.0, 1.5], vec![2.0, 2.5]], &texts);

        assert_eq!(response.model, "ovh-embeddings");
        assert_eq!(response.object, "list");
        assert_eq!(response.data.len(), 2);
        for (i, entry) in response.data.iter().enumerate() {
            assert_eq!(entry.index, i);
            assert_eq!(entry.object, "embedding");
        }
        assert_eq!(response.data[1].embedding, vec![2.0, 2.5]);
        assert_eq!(response.usage.prompt_tokens, 3);
        assert_eq!(response.usage.total_tokens, 3);
    }

    #[test]
    fn test_assemble_empty() {
        let response = assemble_response(Vec::new(), &[]);
        assert!(response.data.is_empty());
        assert_eq!(response.usage.total_tokens, 0);
    }

    #[test]
    fn test_vectors_are_not_validated() {
        let texts = vec!["x".to_string(), "y".to_string()];
        let response = assemble_response(vec![vec![], vec![0.1, 0.2, 0.3]], &texts);
        assert!(response.data[0].embedding.is_empty());
        assert_eq!(response.data[1].embedding.len(), 3);
    }
}
