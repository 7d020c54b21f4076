//! One-shot embedding through the configured upstream.

use anyhow::Result;

use embridge_core::translator::BatchTranslator;
use embridge_infra::ovh::OvhBatchClient;
use embridge_types::config::ProxyConfig;
use embridge_types::input::EmbeddingInput;

/// Embed `texts` exactly as the server would and print the JSON response.
pub async fn embed_texts(config: ProxyConfig, texts: Vec<String>) -> Result<()> {
    let client = OvhBatchClient::from_config(&config)?;
    let translator = BatchTranslator::new(client, config.batch_size);

    let response = translator.translate(EmbeddingInput::from(texts)).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
