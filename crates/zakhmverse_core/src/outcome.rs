//! The pipeline's caller-facing outcome type.

use crate::GeneratedPoem;
use serde::{Deserialize, Serialize};

/// The sole value the pipeline returns to callers.
///
/// Exactly one of a poem or a short user-facing error message, never both
/// and never neither. Serialization is untagged, so the wire shape is
/// `{"poem": ...}` on success and `{"error": ...}` on failure.
///
/// Error messages here are fixed user-facing strings; the typed errors
/// behind them are logged inside the pipeline and never cross this
/// boundary.
///
/// # Examples
///
/// ```
/// use zakhmverse_core::PoemOutcome;
///
/// let ok = PoemOutcome::poem("Roses are red");
/// assert!(ok.is_poem());
/// assert_eq!(ok.as_poem(), Some("Roses are red"));
/// assert_eq!(ok.as_error(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PoemOutcome {
    /// Successful generation
    Poem {
        /// The generated poem text
        poem: String,
    },
    /// Terminal failure
    Error {
        /// Short human-readable message suitable for direct display
        error: String,
    },
}

impl PoemOutcome {
    /// Create a successful outcome from poem text.
    pub fn poem(poem: impl Into<String>) -> Self {
        PoemOutcome::Poem { poem: poem.into() }
    }

    /// Create a failed outcome from a user-facing message.
    pub fn error(error: impl Into<String>) -> Self {
        PoemOutcome::Error {
            error: error.into(),
        }
    }

    /// True for a successful outcome.
    pub fn is_poem(&self) -> bool {
        matches!(self, PoemOutcome::Poem { .. })
    }

    /// True for a failed outcome.
    pub fn is_error(&self) -> bool {
        matches!(self, PoemOutcome::Error { .. })
    }

    /// The poem text, if this outcome is a success.
    pub fn as_poem(&self) -> Option<&str> {
        match self {
            PoemOutcome::Poem { poem } => Some(poem),
            PoemOutcome::Error { .. } => None,
        }
    }

    /// The user-facing message, if this outcome is a failure.
    pub fn as_error(&self) -> Option<&str> {
        match self {
            PoemOutcome::Poem { .. } => None,
            PoemOutcome::Error { error } => Some(error),
        }
    }
}

impl From<GeneratedPoem> for PoemOutcome {
    fn from(poem: GeneratedPoem) -> Self {
        PoemOutcome::Poem {
            poem: poem.into_poem(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_serializes_to_poem_shape() {
        let outcome = PoemOutcome::poem("Roses are red");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"poem": "Roses are red"}));
    }

    #[test]
    fn failure_serializes_to_error_shape() {
        let outcome = PoemOutcome::error("Invalid input.");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Invalid input."}));
    }

    #[test]
    fn untagged_deserialization_picks_the_right_variant() {
        let outcome: PoemOutcome = serde_json::from_str(r#"{"poem": "A verse"}"#).unwrap();
        assert_eq!(outcome.as_poem(), Some("A verse"));

        let outcome: PoemOutcome =
            serde_json::from_str(r#"{"error": "Invalid input."}"#).unwrap();
        assert_eq!(outcome.as_error(), Some("Invalid input."));
    }

    #[test]
    fn generated_poem_converts_to_success() {
        let outcome = PoemOutcome::from(GeneratedPoem::new("A verse"));
        assert!(outcome.is_poem());
        assert_eq!(outcome.as_poem(), Some("A verse"));
    }
}
