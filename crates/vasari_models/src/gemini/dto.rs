//! Gemini generateContent data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A text part within a content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiPart {
    /// Part text
    pub text: String,
}

/// A role-tagged content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Role: "user" in requests, "model" in responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

/// Sampling configuration for a generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GeminiGenerationConfig {
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl GeminiGenerationConfig {
    /// Creates a config with the given temperature.
    pub fn new(temperature: Option<f32>) -> Self {
        Self { temperature }
    }

    /// Creates a new builder for GeminiGenerationConfig.
    pub fn builder() -> GeminiGenerationConfigBuilder {
        GeminiGenerationConfigBuilder::default()
    }
}

/// Gemini generateContent request.
#[derive(Debug, Clone, Serialize, Getters, Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation contents
    contents: Vec<GeminiContent>,
    /// Generation configuration
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

impl GeminiRequest {
    /// Creates a new request from contents and an optional config.
    pub fn new(
        contents: Vec<GeminiContent>,
        generation_config: Option<GeminiGenerationConfig>,
    ) -> Self {
        Self {
            contents,
            generation_config,
        }
    }

    /// Creates a new builder for GeminiRequest.
    pub fn builder() -> GeminiRequestBuilder {
        GeminiRequestBuilder::default()
    }
}

/// A candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    /// Generated content, absent when the candidate was blocked
    #[serde(default)]
    pub content: Option<GeminiContent>,
    /// Reason generation stopped
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

/// Gemini generateContent response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    /// Candidate completions
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// Structured error body returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiApiError {
    /// Error details
    pub error: GeminiApiErrorDetail,
}

/// Detail block of an API error body.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiApiErrorDetail {
    /// Numeric error code
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Status string such as "INVALID_ARGUMENT"
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_to_wire_shape() {
        let request = GeminiRequest::new(
            vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: "Hello".to_string(),
                }],
            }],
            Some(
                GeminiGenerationConfig::builder()
                    .temperature(0.7f32)
                    .build()
                    .expect("Failed to build config"),
            ),
        );

        let json = serde_json::to_value(&request).expect("Failed to serialize");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "Hello");
        assert!((json["generationConfig"]["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn response_deserializes_candidates() {
        let body = r###"{
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "## Outline"}]
                },
                "finishReason": "STOP"
            }]
        }"###;

        let response: GeminiResponse = serde_json::from_str(body).expect("Failed to parse");
        assert_eq!(response.candidates.len(), 1);
        let content = response.candidates[0].content.as_ref().unwrap();
        assert_eq!(content.parts[0].text, "## Outline");
        assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn error_body_deserializes() {
        let body = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        }"#;

        let error: GeminiApiError = serde_json::from_str(body).expect("Failed to parse");
        assert_eq!(error.error.code, Some(400));
        assert!(error.error.message.contains("API key not valid"));
    }
}
