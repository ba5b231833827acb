//! HTTP server lifecycle.

use tracing::info;
use vasari_core::ContentDriver;
use vasari_error::{ServerError, VasariResult};
use vasari_studio::CreatorToolkit;

use crate::config::ServerConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// HTTP server hosting the creator hub.
pub struct CreatorServer<D: ContentDriver> {
    config: ServerConfig,
    state: AppState<D>,
}

impl<D: ContentDriver + 'static> CreatorServer<D> {
    /// Assemble a server around a toolkit.
    pub fn new(config: ServerConfig, toolkit: CreatorToolkit<D>) -> Self {
        Self {
            config,
            state: AppState::new(toolkit),
        }
    }

    /// The listener settings this server was built with.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the listener and serve until Ctrl+C.
    pub async fn start(self) -> VasariResult<()> {
        let addr = *self.config.bind_addr();
        let app = create_router(self.state);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| ServerError::new(format!("failed to bind {}: {}", addr, e)))?;
        info!("Creator hub listening on http://{}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::new(format!("server exited: {}", e)))?;
        Ok(())
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    info!("Shutdown signal received, stopping server");
}
