//! OvhBatchClient -- concrete [`UpstreamEmbedder`] for the OVH batch API.
//!
//! Sends one `POST` per batch with a bearer token. No retries and no request
//! timeout: a hanging upstream holds the inbound request until it answers.
//!
//! The token is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building the `Authorization` header.

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};

use embridge_core::upstream::UpstreamEmbedder;
use embridge_types::config::ProxyConfig;
use embridge_types::embedding::EmbeddingVector;
use embridge_types::error::UpstreamError;

/// HTTP client for an OVH `batch_text2vec` endpoint.
///
/// Does NOT derive Debug so the token cannot leak through `{:?}`.
pub struct OvhBatchClient {
    client: reqwest::Client,
    url: String,
    token: SecretString,
}

impl OvhBatchClient {
    pub const PROVIDER_NAME: &'static str = "ovh";

    /// Create a client for `url` authenticating with `token`.
    pub fn new(url: String, token: SecretString) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("embridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| UpstreamError::Setup(e.to_string()))?;

        Ok(Self { client, url, token })
    }

    /// Create a client from the proxy configuration.
    pub fn from_config(config: &ProxyConfig) -> Result<Self, UpstreamError> {
        Self::new(
            config.upstream_url.clone(),
            SecretString::from(config.upstream_token.expose_secret().to_owned()),
        )
    }

    /// The upstream endpoint this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl UpstreamEmbedder for OvhBatchClient {
    fn provider_name(&self) -> &str {
        Self::PROVIDER_NAME
    }

    async fn embed_batch(&self, batch: &[String]) -> Result<Vec<EmbeddingVector>, UpstreamError> {
        let body = serde_json::to_vec(batch).map_err(|e| UpstreamError::Serialize(e.to_string()))?;

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(self.token.expose_secret())
            .body(body)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        serde_json::from_slice::<Vec<EmbeddingVector>>(&bytes)
            .map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const PATH: &str = "/api/batch_text2vec";

    fn client_for(server: &MockServer) -> OvhBatchClient {
        OvhBatchClient::new(server.url(PATH), SecretString::from("test-token".to_string())).unwrap()
    }

    fn batch(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_embed_batch_success() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(PATH)
                    .header("Authorization", "Bearer test-token")
                    .header("Content-Type", "application/json")
                    .json_body(json!(["hello world", "second"]));
                then.status(200)
                    .header("Content-Type", "application/json")
                    .json_body(json!([[0.1, 0.2, 0.3], [0.4, 0.5, 0.6]]));
            })
            .await;

        let client = client_for(&server);
        let vectors = client
            .embed_batch(&batch(&["hello world", "second"]))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(vectors, vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]);
    }

    #[tokio::test]
    async fn test_non_200_status_echoes_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(503).body("upstream overloaded");
            })
            .await;

        let err = client_for(&server).embed_batch(&batch(&["x"])).await.unwrap_err();

        mock.assert_async().await;
        match err {
            UpstreamError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "upstream overloaded");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_other_success_codes_are_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(202).json_body(json!([[1.0]]));
            })
            .await;

        let err = client_for(&server).embed_batch(&batch(&["x"])).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Status { status: 202, .. }));
    }

    #[tokio::test]
    async fn test_unparseable_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(PATH);
                then.status(200).json_body(json!({"embeddings": [[1.0]]}));
            })
            .await;

        let err = client_for(&server).embed_batch(&batch(&["x"])).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Decode(_)));
        assert!(err.is_protocol());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = OvhBatchClient::new(
            "http://127.0.0.1:9/api/batch_text2vec".to_string(),
            SecretString::from("t".to_string()),
        )
        .unwrap();

        let err = client.embed_batch(&batch(&["x"])).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_from_config() {
        let config = ProxyConfig {
            batch_size: embridge_types::config::default_batch_size(),
            upstream_url: "https://example.invalid/api/batch_text2vec".to_string(),
            upstream_token: SecretString::from("abc".to_string()),
            port: 14152,
            host: "127.0.0.1".to_string(),
        };

        let client = OvhBatchClient::from_config(&config).unwrap();
        assert_eq!(client.url(), "https://example.invalid/api/batch_text2vec");
        assert_eq!(client.provider_name(), "ovh");
    }
}
