//! Credential type for API authentication.

use vasari_error::{CredentialError, CredentialErrorKind};

/// An opaque API credential.
///
/// Resolved once at startup and handed explicitly to whatever client needs
/// it. The token never appears in `Debug` output and the type has no
/// `Display` impl.
///
/// # Examples
///
/// ```
/// use vasari_core::Credential;
///
/// let credential = Credential::new("test-token").unwrap();
/// assert_eq!(credential.expose(), "test-token");
/// assert_eq!(format!("{:?}", credential), "Credential(****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Create a credential from a raw token.
    ///
    /// Empty tokens are rejected.
    #[track_caller]
    pub fn new(token: impl Into<String>) -> Result<Self, CredentialError> {
        let token = token.into();
        if token.is_empty() {
            return Err(CredentialError::new(CredentialErrorKind::EmptyCredential));
        }
        Ok(Self(token))
    }

    /// Access the raw token for insertion into a request header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_token() {
        let err = Credential::new("").unwrap_err();
        assert_eq!(err.kind, CredentialErrorKind::EmptyCredential);
    }

    #[test]
    fn debug_redacts_token() {
        let credential = Credential::new("sk-secret").unwrap();
        let rendered = format!("{:?}", credential);
        assert!(!rendered.contains("sk-secret"));
    }
}
