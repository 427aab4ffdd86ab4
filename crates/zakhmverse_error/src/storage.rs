//! History storage error types.

/// Kinds of history storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StorageErrorKind {
    /// No history entry exists with the given id
    #[display("History entry not found: {}", _0)]
    EntryNotFound(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use zakhmverse_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::EntryNotFound("abc-123".to_string()));
/// assert!(format!("{}", err).contains("abc-123"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
