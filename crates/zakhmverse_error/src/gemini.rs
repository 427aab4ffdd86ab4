//! Gemini-specific error types.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// Failed to create Gemini client
    ClientCreation(String),
    /// API request failed before a response arrived
    ApiRequest(String),
    /// HTTP error with status code and message
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Response body could not be parsed into the expected shape
    ResponseParsing(String),
    /// Structured output lacked the required poem field
    MissingPoem,
    /// Structured output carried an empty poem field
    EmptyPoem,
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingApiKey => {
                write!(f, "GEMINI_API_KEY environment variable not set")
            }
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create Gemini client: {msg}")
            }
            GeminiErrorKind::ApiRequest(msg) => {
                write!(f, "Gemini API request failed: {msg}")
            }
            GeminiErrorKind::HttpError {
                status_code,
                message,
            } => {
                write!(f, "HTTP error {status_code}: {message}")
            }
            GeminiErrorKind::ResponseParsing(msg) => {
                write!(f, "Failed to parse Gemini response: {msg}")
            }
            GeminiErrorKind::MissingPoem => {
                write!(f, "Structured output missing required poem field")
            }
            GeminiErrorKind::EmptyPoem => {
                write!(f, "Structured output contained an empty poem field")
            }
        }
    }
}

/// Gemini error with location tracking.
///
/// # Examples
///
/// ```
/// use zakhmverse_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
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
    /// Create a new Gemini error with automatic location tracking.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display_includes_status() {
        let err = GeminiError::new(GeminiErrorKind::HttpError {
            status_code: 429,
            message: "quota exceeded".to_string(),
        });
        let rendered = format!("{err}");
        assert!(rendered.contains("429"));
        assert!(rendered.contains("quota exceeded"));
    }

    #[test]
    fn new_records_call_site() {
        let err = GeminiError::new(GeminiErrorKind::MissingPoem);
        assert!(err.file.ends_with("gemini.rs"));
        assert!(err.line > 0);
    }
}
