//! Credential source definitions.

use std::path::PathBuf;

/// A place a credential may be found.
///
/// Sources are consulted in order; the first one yielding a non-empty value
/// wins. A source that cannot be read counts as absent rather than failing
/// resolution outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// A process environment variable.
    Environment {
        /// Variable name to read
        var: String,
    },
    /// A TOML secrets file with a top-level string key.
    SecretsFile {
        /// Path to the secrets file
        path: PathBuf,
        /// Key to look up
        key: String,
    },
}

impl CredentialSource {
    /// Source backed by a process environment variable.
    pub fn environment(var: impl Into<String>) -> Self {
        Self::Environment { var: var.into() }
    }

    /// Source backed by a TOML secrets file.
    pub fn secrets_file(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self::SecretsFile {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Human-readable description of where this source looks.
    pub fn describe(&self) -> String {
        match self {
            CredentialSource::Environment { var } => {
                format!("environment variable {}", var)
            }
            CredentialSource::SecretsFile { path, key } => {
                format!("key {} in {}", key, path.display())
            }
        }
    }

    /// Look up the credential value, treating empty values as absent.
    ///
    /// Read and parse failures are logged at debug level and reported as
    /// absent so the next source in the chain gets its turn.
    pub fn lookup(&self) -> Option<String> {
        match self {
            CredentialSource::Environment { var } => match std::env::var(var) {
                Ok(value) if !value.is_empty() => Some(value),
                _ => None,
            },
            CredentialSource::SecretsFile { path, key } => {
                let content = match std::fs::read_to_string(path) {
                    Ok(content) => content,
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "secrets file unreadable");
                        return None;
                    }
                };
                let table: toml::Table = match toml::from_str(&content) {
                    Ok(table) => table,
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "secrets file unparseable");
                        return None;
                    }
                };
                table
                    .get(key)
                    .and_then(|value| value.as_str())
                    .filter(|value| !value.is_empty())
                    .map(|value| value.to_string())
            }
        }
    }
}

/// Fold an ordered source chain down to its first non-empty value.
///
/// Returns the value together with the source that produced it, or `None`
/// when every source comes up empty.
pub fn first_non_empty(sources: &[CredentialSource]) -> Option<(String, &CredentialSource)> {
    sources
        .iter()
        .find_map(|source| source.lookup().map(|value| (value, source)))
}
