//! Command-line interface module.
//!
//! Provides the CLI structure and command handlers for the vasari binary.

mod check;
mod commands;
mod serve;

pub use check::handle_check_command;
pub use commands::{Cli, Commands};
pub use serve::handle_serve_command;
