//! Resolved configuration display.

use anyhow::Result;
use console::style;

use embridge_types::config::ProxyConfig;

const REDACTED: &str = "[REDACTED]";

/// Print the configuration the server would start with.
///
/// The upstream token is never printed, only whether one is set.
pub fn show_config(config: &ProxyConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config_json(config))?);
        return Ok(());
    }

    println!();
    println!(
        "  {} embridge v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  {}", style("── Upstream ──").dim());
    println!("  URL:        {}", style(&config.upstream_url).cyan());
    println!("  Token:      {}", style(REDACTED).dim());
    println!("  Batch size: {}", style(config.batch_size.get()).bold());
    println!();
    println!("  {}", style("── Server ──").dim());
    println!("  Listen:     {}", style(config.bind_address()).cyan());
    println!();

    Ok(())
}

fn config_json(config: &ProxyConfig) -> serde_json::Value {
    serde_json::json!({
        "version": env!("CARGO_PKG_VERSION"),
        "upstream_url": config.upstream_url,
        "upstream_token": REDACTED,
        "batch_size": config.batch_size.get(),
        "host": config.host,
        "port": config.port,
    })
}
