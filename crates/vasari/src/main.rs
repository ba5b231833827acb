//! Binary entry point for the Vasari creator hub.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use vasari::cli::{Cli, Commands, handle_check_command, handle_serve_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { addr } => handle_serve_command(addr).await,
        Commands::Check => handle_check_command(),
    }
}
