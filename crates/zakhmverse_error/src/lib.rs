//! Error types for the ZakhmVerse poem generation library.
//!
//! Every fallible layer fails loudly with a typed error from this crate.
//! Shaping errors into user-facing messages happens in exactly one place,
//! the pipeline's outcome boundary, so these types preserve full detail
//! for logs and tests.

mod config;
mod gemini;
mod storage;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum ZakhmverseErrorKind {
    /// Poem request validation error
    Validation(ValidationError),
    /// Gemini provider error
    Gemini(GeminiError),
    /// Configuration loading error
    Config(ConfigError),
    /// History storage error
    Storage(StorageError),
}

impl std::fmt::Display for ZakhmverseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZakhmverseErrorKind::Validation(e) => write!(f, "{e}"),
            ZakhmverseErrorKind::Gemini(e) => write!(f, "{e}"),
            ZakhmverseErrorKind::Config(e) => write!(f, "{e}"),
            ZakhmverseErrorKind::Storage(e) => write!(f, "{e}"),
        }
    }
}

/// ZakhmVerse error with kind discrimination.
///
/// Boxed so that `Result<T, ZakhmverseError>` stays one word wide on the
/// happy path regardless of how large a kind variant grows.
///
/// # Examples
///
/// ```
/// use zakhmverse_error::{GeminiError, GeminiErrorKind, ZakhmverseError, ZakhmverseErrorKind};
///
/// let err: ZakhmverseError = GeminiError::new(GeminiErrorKind::MissingApiKey).into();
/// assert!(matches!(err.kind(), ZakhmverseErrorKind::Gemini(_)));
/// ```
#[derive(Debug)]
pub struct ZakhmverseError(Box<ZakhmverseErrorKind>);

impl ZakhmverseError {
    /// Create a new error from a kind.
    pub fn new(kind: ZakhmverseErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ZakhmverseErrorKind {
        &self.0
    }
}

impl std::fmt::Display for ZakhmverseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ZakhmVerse Error: {}", self.0)
    }
}

impl std::error::Error for ZakhmverseError {}

impl<T> From<T> for ZakhmverseError
where
    T: Into<ZakhmverseErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type alias for ZakhmVerse operations.
pub type ZakhmverseResult<T> = std::result::Result<T, ZakhmverseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_errors_convert_through_kind() {
        let err: ZakhmverseError =
            ValidationError::new(ValidationErrorKind::EmptyPrompt).into();
        assert!(matches!(err.kind(), ZakhmverseErrorKind::Validation(_)));

        let err: ZakhmverseError = StorageError::new(StorageErrorKind::EntryNotFound(
            "missing-id".to_string(),
        ))
        .into();
        assert!(matches!(err.kind(), ZakhmverseErrorKind::Storage(_)));
    }

    #[test]
    fn display_nests_kind_detail() {
        let err: ZakhmverseError = GeminiError::new(GeminiErrorKind::ApiRequest(
            "connection refused".to_string(),
        ))
        .into();
        let rendered = format!("{err}");
        assert!(rendered.starts_with("ZakhmVerse Error:"));
        assert!(rendered.contains("connection refused"));
    }
}
