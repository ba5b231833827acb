//! Client for the Gemini generateContent API.

use crate::gemini::{GeminiApiError, GeminiResponse, conversions};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};
use vasari_core::{ContentDriver, Credential, GenerateRequest, GenerateResponse};
use vasari_error::{GeminiError, GeminiErrorKind, VasariResult};

/// Default base URL for the generative language API.
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for Google's hosted generative language API.
///
/// Holds the credential it was constructed with and inserts it into the
/// `x-goog-api-key` header on every call. The base URL can be overridden to
/// point tests at a local stub.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    credential: Credential,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini client against the hosted API.
    ///
    /// # Arguments
    ///
    /// * `credential` - Resolved API credential
    /// * `model` - Model identifier to dispatch against
    pub fn new(credential: Credential, model: String) -> Result<Self, GeminiError> {
        Self::with_base_url(credential, model, GEMINI_BASE_URL.to_string())
    }

    /// Creates a new Gemini client against an explicit base URL.
    #[instrument(skip(credential), fields(model = %model, url = %base_url))]
    pub fn with_base_url(
        credential: Credential,
        model: String,
        base_url: String,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(model = %model, url = %base_url, "Created Gemini client");

        Ok(Self {
            client,
            credential,
            model,
            base_url,
        })
    }

    /// Issues one generateContent call.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a non-success
    /// status, or the response cannot be parsed.
    #[instrument(skip(self, req), fields(model = %req.model()))]
    pub async fn generate_content(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError> {
        let gemini_request = conversions::to_gemini_request(req);
        let url = format!("{}/models/{}:generateContent", self.base_url, req.model());

        debug!(
            model = %req.model(),
            temperature = req.temperature(),
            "Sending request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.credential.expose())
            .json(&gemini_request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::Request(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = api_error_message(&error_text);
            error!(status = %status, error = %message, "API error");

            return Err(GeminiError::new(GeminiErrorKind::Api {
                status_code: status.as_u16(),
                message,
            }));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(
            candidates = gemini_response.candidates.len(),
            "Received response"
        );

        conversions::from_gemini_response(&gemini_response)
    }
}

#[async_trait]
impl ContentDriver for GeminiClient {
    async fn generate(&self, req: &GenerateRequest) -> VasariResult<GenerateResponse> {
        Ok(self.generate_content(req).await?)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Pulls the human-readable message out of an API error body.
///
/// The API wraps failures in a structured `error` object; when the body is
/// not that shape the raw text is passed through.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<GeminiApiError>(body)
        .map(|parsed| parsed.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_yields_its_message() {
        let body = r#"{"error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(api_error_message(body), "Quota exceeded");
    }

    #[test]
    fn unstructured_error_body_passes_through() {
        assert_eq!(api_error_message("upstream timeout"), "upstream timeout");
    }

    #[test]
    fn client_reports_provider_and_model() {
        let credential = Credential::new("test-key").unwrap();
        let client = GeminiClient::new(credential, "gemini-2.5-flash".to_string())
            .expect("Failed to create client");

        assert_eq!(client.provider_name(), "gemini");
        assert_eq!(client.model_name(), "gemini-2.5-flash");
    }
}
