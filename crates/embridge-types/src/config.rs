//! Proxy configuration.
//!
//! `ProxyConfig` is built once at startup (see `embridge_infra::config`) and
//! shared read-only by every request. It is never re-read per request.

use std::num::NonZeroUsize;

use secrecy::SecretString;

/// Environment variable holding the number of texts per upstream call.
pub const ENV_BATCH_SIZE: &str = "BATCH_SIZE";
/// Environment variable holding the upstream batch embeddings URL.
pub const ENV_UPSTREAM_URL: &str = "OVH_BATCH_API_URL";
/// Environment variable holding the upstream bearer token.
pub const ENV_UPSTREAM_TOKEN: &str = "OVH_AI_ENDPOINTS_ACCESS_TOKEN";
/// Environment variable holding the listen port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable holding the listen address.
pub const ENV_HOST: &str = "HOST";

pub const DEFAULT_BATCH_SIZE: usize = 10;
pub const DEFAULT_PORT: u16 = 14152;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Immutable runtime configuration of the proxy.
///
/// The token is a [`SecretString`]: it is only exposed when building the
/// upstream `Authorization` header and shows as `[REDACTED]` in `Debug`.
#[derive(Debug)]
pub struct ProxyConfig {
    /// Maximum number of texts sent in one upstream call.
    pub batch_size: NonZeroUsize,
    /// Upstream batch embeddings endpoint (absolute http/https URL).
    pub upstream_url: String,
    /// Bearer token for the upstream endpoint.
    pub upstream_token: SecretString,
    /// Listen port.
    pub port: u16,
    /// Listen address.
    pub host: String,
}

impl ProxyConfig {
    /// `host:port` to bind the listener to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The default batch size as a `NonZeroUsize`.
pub fn default_batch_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_BATCH_SIZE).unwrap_or(NonZeroUsize::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProxyConfig {
        ProxyConfig {
            batch_size: default_batch_size(),
            upstream_url: "https://example.invalid/api/batch_text2vec".to_string(),
            upstream_token: SecretString::from("super-secret-token".to_string()),
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }

    #[test]
    fn test_default_batch_size() {
        assert_eq!(default_batch_size().get(), 10);
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(config().bind_address(), "0.0.0.0:14152");
    }

    #[test]
    fn test_debug_redacts_token() {
        let debug = format!("{:?}", config());
        assert!(!debug.contains("super-secret-token"));
        assert!(debug.contains("batch_text2vec"));
    }
}
