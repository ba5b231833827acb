//! Serve command handler.

use std::net::SocketAddr;

use tracing::{error, info};
use vasari_credentials::{CredentialResolver, secrets_file_path};
use vasari_error::{VasariError, VasariErrorKind};
use vasari_models::GeminiClient;
use vasari_server::{CreatorServer, ServerConfig};
use vasari_studio::{CreatorToolkit, DEFAULT_MODEL};

/// Resolve the API key and serve the creator hub until shutdown.
pub async fn handle_serve_command(addr: Option<SocketAddr>) -> anyhow::Result<()> {
    let resolved = match CredentialResolver::standard().resolve() {
        Ok(resolved) => resolved,
        Err(e) => {
            error!("{}", e);
            eprintln!("❌ ERROR: {}", startup_failure_message(&e));
            std::process::exit(1);
        }
    };
    info!("Using Gemini API key from {}", resolved.source());

    let client = GeminiClient::new(resolved.into_credential(), DEFAULT_MODEL.to_string())?;
    let toolkit = CreatorToolkit::new(client);

    let config = match addr {
        Some(addr) => ServerConfig::builder().bind_addr(addr).build(),
        None => ServerConfig::default(),
    };
    CreatorServer::new(config, toolkit).start().await?;
    Ok(())
}

/// Terminal text for a startup failure, with setup help when the key is missing.
fn startup_failure_message(error: &VasariError) -> String {
    match error.kind() {
        VasariErrorKind::Credential(e) if e.is_missing() => {
            format!("Gemini API key is missing. {}", missing_key_help())
        }
        _ => error.to_string(),
    }
}

fn missing_key_help() -> String {
    match secrets_file_path() {
        Some(path) => format!(
            "Please set GEMINI_API_KEY in your local .env file or in {}.",
            path.display()
        ),
        None => "Please set GEMINI_API_KEY in your local .env file.".to_string(),
    }
}
