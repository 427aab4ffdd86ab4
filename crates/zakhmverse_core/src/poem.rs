//! Structured generation output.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The structured output contract for a generation call.
///
/// The remote model must answer with a JSON object carrying a single
/// required `poem` string. Anything else is a provider error, never a
/// value to repair downstream.
///
/// # Examples
///
/// ```
/// use zakhmverse_core::GeneratedPoem;
///
/// let poem: GeneratedPoem = serde_json::from_str(r#"{"poem": "Roses are red"}"#).unwrap();
/// assert_eq!(poem.poem(), "Roses are red");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GeneratedPoem {
    /// The generated poem text
    poem: String,
}

impl GeneratedPoem {
    /// Create a poem from the given text.
    pub fn new(poem: impl Into<String>) -> Self {
        Self { poem: poem.into() }
    }

    /// Consume the value, returning the poem text.
    pub fn into_poem(self) -> String {
        self.poem
    }
}
