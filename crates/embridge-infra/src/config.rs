//! Proxy configuration loader.
//!
//! Loads an optional `.env` file from the working directory, then reads the
//! process environment into a [`ProxyConfig`]. Missing or invalid required
//! values are a [`ConfigError`] and the process must not start.
//!
//! | variable | required | default |
//! |---|---|---|
//! | `BATCH_SIZE` | no | 10 |
//! | `OVH_BATCH_API_URL` | yes | |
//! | `OVH_AI_ENDPOINTS_ACCESS_TOKEN` | yes | |
//! | `PORT` | no | 14152 |
//! | `HOST` | no | 0.0.0.0 |

use std::num::NonZeroUsize;

use reqwest::Url;
use secrecy::SecretString;

use embridge_types::config::{
    DEFAULT_HOST, DEFAULT_PORT, ENV_BATCH_SIZE, ENV_HOST, ENV_PORT, ENV_UPSTREAM_TOKEN,
    ENV_UPSTREAM_URL, ProxyConfig, default_batch_size,
};
use embridge_types::error::ConfigError;

/// Load configuration from `.env` (if present) and the process environment.
///
/// Variables already set in the environment win over `.env` entries.
pub fn load_proxy_config() -> Result<ProxyConfig, ConfigError> {
    match dotenv::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "Loaded .env file"),
        Err(err) if err.not_found() => tracing::debug!("No .env file found, using environment only"),
        Err(err) => tracing::warn!("Failed to load .env file: {err}"),
    }

    proxy_config_from_lookup(|key| std::env::var(key).ok())
}

/// Build a [`ProxyConfig`] from any key lookup.
///
/// Empty values of optional variables fall back to their defaults; empty
/// values of required variables count as missing.
pub fn proxy_config_from_lookup<F>(lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    let batch_size = match get(ENV_BATCH_SIZE) {
        Some(raw) => parse_batch_size(&raw)?,
        None => default_batch_size(),
    };

    let upstream_url = get(ENV_UPSTREAM_URL).ok_or(ConfigError::Missing(ENV_UPSTREAM_URL))?;
    validate_upstream_url(&upstream_url)?;

    let upstream_token = get(ENV_UPSTREAM_TOKEN).ok_or(ConfigError::Missing(ENV_UPSTREAM_TOKEN))?;

    let port = match get(ENV_PORT) {
        Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
            var: ENV_PORT,
            value: raw.clone(),
            reason: e.to_string(),
        })?,
        None => DEFAULT_PORT,
    };

    let host = get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

    Ok(ProxyConfig {
        batch_size,
        upstream_url,
        upstream_token: SecretString::from(upstream_token),
        port,
        host,
    })
}

/// Parse a batch size; it must be an integer of at least 1.
pub fn parse_batch_size(raw: &str) -> Result<NonZeroUsize, ConfigError> {
    raw.trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| ConfigError::Invalid {
            var: ENV_BATCH_SIZE,
            value: raw.to_string(),
            reason: "must be a positive integer".to_string(),
        })
}

fn validate_upstream_url(raw: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var: ENV_UPSTREAM_URL,
        value: raw.to_string(),
        reason,
    };

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}
