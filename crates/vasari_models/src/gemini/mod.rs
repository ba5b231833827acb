//! Gemini generateContent API integration.
//!
//! This module drives the hosted REST endpoint directly so the wire format
//! stays visible and tests can stub the server.

mod client;
mod conversions;
mod dto;

pub use client::{GEMINI_BASE_URL, GeminiClient};
pub use conversions::{from_gemini_response, to_gemini_request};
pub use dto::{
    GeminiApiError, GeminiApiErrorDetail, GeminiCandidate, GeminiContent, GeminiGenerationConfig,
    GeminiGenerationConfigBuilder, GeminiPart, GeminiRequest, GeminiRequestBuilder, GeminiResponse,
};
