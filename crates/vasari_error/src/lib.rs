//! Error types for the Vasari creator toolkit.
//!
//! This crate provides the foundation error types used throughout the Vasari
//! workspace. Each domain gets its own error struct with source-location
//! tracking; the crate-level [`VasariError`] boxes a kind enum so the type
//! stays one pointer wide on the happy path.

mod credential;
mod gemini;
mod server;

pub use credential::{CredentialError, CredentialErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use server::ServerError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum VasariErrorKind {
    /// Credential resolution failure
    Credential(CredentialError),
    /// Gemini API failure
    Gemini(GeminiError),
    /// Web shell failure
    Server(ServerError),
}

impl std::fmt::Display for VasariErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VasariErrorKind::Credential(e) => write!(f, "{}", e),
            VasariErrorKind::Gemini(e) => write!(f, "{}", e),
            VasariErrorKind::Server(e) => write!(f, "{}", e),
        }
    }
}

/// Vasari error with kind discrimination.
#[derive(Debug)]
pub struct VasariError(Box<VasariErrorKind>);

impl VasariError {
    /// Create a new error from a kind.
    pub fn new(kind: VasariErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VasariErrorKind {
        &self.0
    }
}

impl std::fmt::Display for VasariError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vasari Error: {}", self.0)
    }
}

impl std::error::Error for VasariError {}

// Generic From implementation for any type that converts to VasariErrorKind
impl<T> From<T> for VasariError
where
    T: Into<VasariErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vasari operations.
pub type VasariResult<T> = std::result::Result<T, VasariError>;
