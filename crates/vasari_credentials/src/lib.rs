//! Credential resolution for the Vasari creator toolkit.
//!
//! The Gemini API key is looked up in an ordered chain of sources: the
//! process environment (with `.env` loaded first) and then a TOML secrets
//! file under the platform config directory. The first non-empty value wins;
//! an exhausted chain is a fatal startup error for the caller to surface.

mod resolver;
mod source;

pub use resolver::{
    CredentialResolver, GEMINI_KEY_VAR, ResolvedCredential, SECRETS_FILE_VAR, secrets_file_path,
};
pub use source::{CredentialSource, first_non_empty};
