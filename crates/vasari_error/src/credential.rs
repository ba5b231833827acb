//! Credential resolution error types.

/// Credential-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CredentialErrorKind {
    /// No credential found in any configured source
    MissingCredential,
    /// A credential value was supplied but empty
    EmptyCredential,
}

impl std::fmt::Display for CredentialErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CredentialErrorKind::MissingCredential => {
                write!(f, "GEMINI_API_KEY not found in environment or secrets file")
            }
            CredentialErrorKind::EmptyCredential => {
                write!(f, "credential value is empty")
            }
        }
    }
}

/// Credential error with source location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{CredentialError, CredentialErrorKind};
///
/// let err = CredentialError::new(CredentialErrorKind::MissingCredential);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct CredentialError {
    /// The kind of error that occurred
    pub kind: CredentialErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CredentialError {
    /// Create a new CredentialError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CredentialErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// True when the error means no source yielded a usable credential.
    pub fn is_missing(&self) -> bool {
        matches!(self.kind, CredentialErrorKind::MissingCredential)
    }
}

impl std::fmt::Display for CredentialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Credential Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for CredentialError {}
