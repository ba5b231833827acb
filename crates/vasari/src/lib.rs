//! Unified entry point for the Vasari creator hub.
//!
//! Vasari assembles canned brainstorming prompts from a handful of form
//! fields, sends them to the Gemini API, and serves the rendered results
//! from a small web shell. This crate re-exports the workspace so one
//! dependency brings in the whole toolkit.

pub mod cli;

pub use vasari_core::{ContentDriver, Credential, GenerateRequest, GenerateResponse};
pub use vasari_credentials::{
    CredentialResolver, CredentialSource, GEMINI_KEY_VAR, ResolvedCredential, SECRETS_FILE_VAR,
    secrets_file_path,
};
pub use vasari_error::{VasariError, VasariErrorKind, VasariResult};
pub use vasari_models::{GEMINI_BASE_URL, GeminiClient};
pub use vasari_server::{CreatorServer, ServerConfig, create_router, render_markdown};
pub use vasari_studio::{
    CAPTIONS_TEMPERATURE, CreatorToolkit, DEFAULT_MODEL, OUTLINE_TEMPERATURE, Platform,
    THUMBNAILS_TEMPERATURE, TITLES_TEMPERATURE, Tone,
};
