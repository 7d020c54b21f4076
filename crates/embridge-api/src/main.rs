//! embridge CLI and embeddings proxy entry point.
//!
//! Binary name: `embridge`
//!
//! Parses CLI arguments, loads configuration from `.env` and the environment,
//! then either serves the OpenAI-compatible embeddings endpoint or runs a
//! one-shot command.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use embridge_infra::config::load_proxy_config;
use embridge_observe::tracing_setup::{init_tracing, shutdown_tracing};
use embridge_types::config::ProxyConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "embridge", &mut std::io::stdout());
        return Ok(());
    }

    let enable_otel = matches!(cli.command, Commands::Serve { otel: true, .. });
    init_tracing(cli.log_filter(), enable_otel).map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_proxy_config().context("failed to load configuration")?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            batch_size,
            otel: _,
        } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(batch_size) = batch_size {
                config.batch_size = batch_size;
            }
            serve(config, cli.quiet).await?;
        }

        Commands::Config { json } => {
            cli::config::show_config(&config, json)?;
        }

        Commands::Embed { texts, batch_size } => {
            if let Some(batch_size) = batch_size {
                config.batch_size = batch_size;
            }
            cli::embed::embed_texts(config, texts).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

async fn serve(config: ProxyConfig, quiet: bool) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        address = %addr,
        upstream = %config.upstream_url,
        batch_size = config.batch_size.get(),
        "Server starting on {addr}"
    );

    if !quiet {
        println!(
            "  {} embridge listening on {}",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}/v1/embeddings")).cyan()
        );
        println!(
            "  {} batches of {} -> {}",
            console::style("↪").dim(),
            console::style(config.batch_size.get()).yellow(),
            console::style(&config.upstream_url).dim()
        );
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }

    let state = AppState::init(config)?;
    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    if !quiet {
        println!("\n  Server stopped.");
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
