//! Shared application state for the HTTP server.

use std::sync::Arc;

use embridge_core::box_upstream::BoxUpstream;
use embridge_core::translator::BatchTranslator;
use embridge_infra::ovh::OvhBatchClient;
use embridge_types::config::ProxyConfig;

/// Cloned into every handler; all fields are `Arc` so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<BatchTranslator<BoxUpstream>>,
    pub config: Arc<ProxyConfig>,
}

impl AppState {
    /// Wire the translator to the OVH batch endpoint from `config`.
    pub fn init(config: ProxyConfig) -> anyhow::Result<Self> {
        let client = OvhBatchClient::from_config(&config)?;
        Ok(Self::with_upstream(config, BoxUpstream::new(client)))
    }

    pub fn with_upstream(config: ProxyConfig, upstream: BoxUpstream) -> Self {
        let translator = BatchTranslator::new(upstream, config.batch_size);
        Self {
            translator: Arc::new(translator),
            config: Arc::new(config),
        }
    }
}
