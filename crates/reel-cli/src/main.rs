//! Reel CLI - Terminal Video Player
//!
//! Features:
//! - Video list loading from the videos endpoint
//! - Previous/next/play/pause transport controls
//! - Markdown title, author and description block
//! - Video list export (text or JSON)

use clap::{Parser, Subcommand};
use reel_core::ClientConfig;
use std::path::PathBuf;
use url::Url;

mod commands;
mod output;

/// Reel CLI - Video list player
#[derive(Parser)]
#[command(name = "reel")]
#[command(version)]
#[command(about = "Play through a server-provided video list", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Videos endpoint (overrides the config file)
    #[arg(short, long, env = "REEL_ENDPOINT")]
    endpoint: Option<Url>,

    /// Request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the player screen (default)
    Play,

    /// Print the ordered video list
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

impl Cli {
    fn client_config(&self) -> anyhow::Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if self.timeout_ms.is_some() {
            config.request_timeout_ms = self.timeout_ms;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    reel_core::init();
    let config = cli.client_config()?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            commands::play(config).await?;
        }
        Commands::List { format } => {
            commands::list(config, &format).await?;
        }
    }

    Ok(())
}
