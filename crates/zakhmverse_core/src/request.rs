//! Poem request types.

use derive_builder::Builder;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// A poem generation request.
///
/// The prompt carries the central theme or subject. The six optional
/// fields are free-form constraint labels; a UI typically offers fixed
/// vocabularies for them (moods like happy or reflective, styles like
/// sonnet or haiku, lengths short through long, rhyme schemes like AABB)
/// and bounds the prompt to 3-200 characters, but this type accepts any
/// strings. The service boundary enforces only a non-empty prompt, so
/// new vocabulary reaches the model without a library release.
///
/// # Examples
///
/// ```
/// use zakhmverse_core::PoemRequest;
///
/// let request = PoemRequest::builder()
///     .prompt("a quiet lake at dawn")
///     .mood("reflective")
///     .style("haiku")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.prompt(), "a quiet lake at dawn");
/// assert_eq!(request.mood().as_deref(), Some("reflective"));
/// assert!(request.language().is_none());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, Setters, Builder,
)]
#[builder(setter(into))]
#[setters(prefix = "with_")]
pub struct PoemRequest {
    /// The central theme or subject of the poem
    #[serde(default)]
    prompt: String,
    /// Desired mood, e.g. "happy" or "reflective"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    mood: Option<String>,
    /// Desired register, e.g. "formal" or "poetic"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    language: Option<String>,
    /// Desired form, e.g. "sonnet" or "haiku"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    style: Option<String>,
    /// Desired length, e.g. "short"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    length: Option<String>,
    /// Words or images to weave in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    keywords: Option<String>,
    /// Desired rhyme scheme, e.g. "AABB"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    rhyme: Option<String>,
}

impl PoemRequest {
    /// Create a builder for constructing a request.
    pub fn builder() -> PoemRequestBuilder {
        PoemRequestBuilder::default()
    }

    /// Create a request carrying only a prompt.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// True when no optional constraint field is present.
    pub fn is_bare(&self) -> bool {
        self.mood.is_none()
            && self.language.is_none()
            && self.style.is_none()
            && self.length.is_none()
            && self.keywords.is_none()
            && self.rhyme.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_prompt() {
        let result = PoemRequest::builder().mood("happy").build();
        assert!(result.is_err());
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let request: PoemRequest = serde_json::from_str(r#"{"mood": "happy"}"#).unwrap();
        assert_eq!(request.prompt(), "");
        assert_eq!(request.mood().as_deref(), Some("happy"));
        assert!(request.style().is_none());
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let request = PoemRequest::from_prompt("the sea");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"prompt": "the sea"}));
    }

    #[test]
    fn setters_replace_fields() {
        let request = PoemRequest::from_prompt("the sea")
            .with_mood(Some("mysterious".to_string()))
            .with_rhyme(Some("ABAB".to_string()));
        assert_eq!(request.mood().as_deref(), Some("mysterious"));
        assert_eq!(request.rhyme().as_deref(), Some("ABAB"));
        assert!(!request.is_bare());
    }
}
