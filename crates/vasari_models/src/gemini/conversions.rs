//! Type conversions between Vasari and Gemini wire formats.

use crate::gemini::{
    GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse,
};
use vasari_core::{GenerateRequest, GenerateResponse};
use vasari_error::{GeminiError, GeminiErrorKind};

/// Converts a generation request to the Gemini wire format.
///
/// The prompt becomes a single user content block; the temperature travels
/// in the generation config.
pub fn to_gemini_request(req: &GenerateRequest) -> GeminiRequest {
    let content = GeminiContent {
        role: Some("user".to_string()),
        parts: vec![GeminiPart {
            text: req.prompt().clone(),
        }],
    };

    let config = GeminiGenerationConfig::new(Some(*req.temperature()));

    GeminiRequest::new(vec![content], Some(config))
}

/// Converts a Gemini response to a generation response.
///
/// Concatenates the text parts of the first candidate. A response with no
/// candidates, no content, or no text is a [`GeminiErrorKind::EmptyResponse`].
pub fn from_gemini_response(response: &GeminiResponse) -> Result<GenerateResponse, GeminiError> {
    let text: String = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyResponse));
    }

    Ok(GenerateResponse::new(text))
}
