//! Gemini provider integration for the Vasari creator toolkit.
//!
//! Provides [`GeminiClient`], a [`vasari_core::ContentDriver`] backed by the
//! generateContent REST endpoint.

mod gemini;

pub use gemini::{
    GEMINI_BASE_URL, GeminiApiError, GeminiApiErrorDetail, GeminiCandidate, GeminiClient,
    GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest, GeminiResponse,
    from_gemini_response, to_gemini_request,
};
