//! Credential resolution over an ordered source chain.

use crate::{CredentialSource, first_non_empty};
use derive_getters::Getters;
use std::path::PathBuf;
use vasari_core::Credential;
use vasari_error::{CredentialError, CredentialErrorKind, VasariResult};

/// Environment variable holding the Gemini API key.
pub const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable overriding the secrets file location.
pub const SECRETS_FILE_VAR: &str = "VASARI_SECRETS_FILE";

/// A successfully resolved credential and the source that supplied it.
#[derive(Debug, Clone, Getters)]
pub struct ResolvedCredential {
    /// The resolved credential
    credential: Credential,
    /// Description of the winning source
    source: String,
}

impl ResolvedCredential {
    /// Consumes the resolution, yielding the credential.
    pub fn into_credential(self) -> Credential {
        self.credential
    }
}

/// Resolves a credential from an ordered chain of sources.
///
/// # Examples
///
/// ```
/// use vasari_credentials::{CredentialResolver, CredentialSource};
///
/// let resolver = CredentialResolver::new(vec![CredentialSource::environment(
///     "A_VARIABLE_NOBODY_SETS",
/// )]);
/// assert!(resolver.resolve().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    sources: Vec<CredentialSource>,
}

impl CredentialResolver {
    /// Build a resolver over an explicit source chain.
    pub fn new(sources: Vec<CredentialSource>) -> Self {
        Self { sources }
    }

    /// The standard chain: process environment first, platform secrets
    /// file second.
    ///
    /// Loads `.env` from the working directory into the process environment
    /// before constructing the chain, so a key placed there is seen by the
    /// environment source. A missing `.env` is fine.
    pub fn standard() -> Self {
        dotenvy::dotenv().ok();

        let mut sources = vec![CredentialSource::environment(GEMINI_KEY_VAR)];
        if let Some(path) = secrets_file_path() {
            sources.push(CredentialSource::secrets_file(path, GEMINI_KEY_VAR));
        }
        Self { sources }
    }

    /// The sources this resolver consults, in order.
    pub fn sources(&self) -> &[CredentialSource] {
        &self.sources
    }

    /// Resolve the credential, taking the first non-empty value in chain
    /// order.
    ///
    /// Fails with [`CredentialErrorKind::MissingCredential`] when every
    /// source comes up empty.
    #[tracing::instrument(skip(self))]
    pub fn resolve(&self) -> VasariResult<ResolvedCredential> {
        match first_non_empty(&self.sources) {
            Some((value, source)) => {
                let credential = Credential::new(value)?;
                let source = source.describe();
                tracing::debug!(%source, "credential resolved");
                Ok(ResolvedCredential { credential, source })
            }
            None => {
                tracing::debug!(sources = self.sources.len(), "no source yielded a credential");
                Err(CredentialError::new(CredentialErrorKind::MissingCredential).into())
            }
        }
    }
}

/// Default secrets file location, honoring the override variable.
///
/// Falls back to `<config_dir>/vasari/secrets.toml`. Returns `None` only
/// when the platform reports no config directory and no override is set.
pub fn secrets_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(SECRETS_FILE_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|dir| dir.join("vasari").join("secrets.toml"))
}
