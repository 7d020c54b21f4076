//! CLI command definitions for the `embridge` binary.
//!
//! Uses clap derive macros for argument parsing. Flags given on the command
//! line override the values loaded from the environment.

pub mod config;
pub mod embed;

use std::num::NonZeroUsize;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use embridge_infra::config::parse_batch_size;

/// OpenAI-compatible embeddings proxy for OVH AI Endpoints.
#[derive(Parser)]
#[command(name = "embridge", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the chosen verbosity; `RUST_LOG` still wins.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,embridge=debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the embeddings proxy server.
    Serve {
        /// Address to bind (overrides HOST).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,

        /// Maximum texts per upstream call (overrides BATCH_SIZE).
        #[arg(long, value_parser = parse_batch_size)]
        batch_size: Option<NonZeroUsize>,

        /// Also export spans to stdout via OpenTelemetry.
        #[arg(long)]
        otel: bool,
    },

    /// Show the resolved configuration with the token redacted.
    Config {
        /// Output machine-readable JSON instead of styled text.
        #[arg(long)]
        json: bool,
    },

    /// Embed texts once through the upstream and print the response.
    Embed {
        /// Texts to embed, in order.
        #[arg(required = true)]
        texts: Vec<String>,

        /// Maximum texts per upstream call (overrides BATCH_SIZE).
        #[arg(long, value_parser = parse_batch_size)]
        batch_size: Option<NonZeroUsize>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
