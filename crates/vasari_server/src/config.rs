//! Server configuration.

use std::net::SocketAddr;

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8501))
}

/// Listener settings for the web shell.
///
/// # Examples
///
/// ```
/// use vasari_server::ServerConfig;
///
/// let config = ServerConfig::default();
/// assert_eq!(config.bind_addr().port(), 8501);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    typed_builder::TypedBuilder,
    derive_getters::Getters,
)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    #[builder(default = default_bind_addr())]
    #[serde(default = "default_bind_addr")]
    bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
