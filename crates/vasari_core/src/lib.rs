//! Core data types for the Vasari creator toolkit.
//!
//! This crate provides the foundation data types shared by the credential
//! resolver, the Gemini client, and the prompt dispatch layer.

mod credential;
mod driver;
mod request;

pub use credential::Credential;
pub use driver::ContentDriver;
pub use request::{GenerateRequest, GenerateRequestBuilder, GenerateResponse};
