//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// Failed to create the Gemini HTTP client
    ClientCreation(String),
    /// Transport-level request failure
    Request(String),
    /// API returned a non-success HTTP status
    Api {
        /// HTTP status code
        status_code: u16,
        /// Error message from the response body
        message: String,
    },
    /// Response body could not be decoded
    ResponseParsing(String),
    /// Response decoded but carried no generated text
    EmptyResponse,
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {}", msg)
            }
            GeminiErrorKind::Request(msg) => write!(f, "Gemini API request failed: {}", msg),
            GeminiErrorKind::Api {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GeminiErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse Gemini response: {}", msg)
            }
            GeminiErrorKind::EmptyResponse => {
                write!(f, "Gemini response contained no generated text")
            }
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::EmptyResponse);
/// assert!(format!("{}", err).contains("no generated text"));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}
