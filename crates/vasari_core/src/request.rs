//! Request and response types for text generation.

use serde::{Deserialize, Serialize};

/// A single-turn generation request.
///
/// Built fresh for every dispatch and discarded once the call returns.
///
/// # Examples
///
/// ```
/// use vasari_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .prompt("Write a haiku about rust")
///     .model("gemini-2.5-flash")
///     .temperature(0.7f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "gemini-2.5-flash");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The fully assembled prompt text
    prompt: String,
    /// Model identifier to dispatch against
    model: String,
    /// Sampling temperature
    temperature: f32,
}

impl GenerateRequest {
    /// Creates a new request with the given prompt, model, and temperature.
    pub fn new(prompt: impl Into<String>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
            temperature,
        }
    }

    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The text returned by a generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Generated text, expected to be markdown
    text: String,
}

impl GenerateResponse {
    /// Creates a response wrapping the generated text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Consumes the response, yielding the generated text.
    pub fn into_text(self) -> String {
        self.text
    }
}
