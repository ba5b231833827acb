//! CLI argument structure for the vasari binary.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

/// Command-line interface for the Vasari creator hub.
#[derive(Parser, Debug)]
#[command(name = "vasari")]
#[command(about = "Gemini Creator Hub - AI brainstorming toolkit for content creators")]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the creator hub web server
    Serve {
        /// Address to bind instead of 127.0.0.1:8501
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
    /// Report where the Gemini API key resolves from
    Check,
}
