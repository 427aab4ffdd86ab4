//! Request validation at the service boundary.
//!
//! A UI in front of this library usually enforces stricter rules (a
//! 3-200 character prompt, fixed constraint vocabularies). The boundary
//! here deliberately checks less: any request with a non-empty prompt is
//! serviceable, so vocabulary changes never require a release.

use zakhmverse_core::PoemRequest;
use zakhmverse_error::{ValidationError, ValidationErrorKind};

/// Validate a raw request and return its normalized form.
///
/// The prompt and any present optional values are trimmed; optional
/// values that are empty or whitespace-only come back as `None`, so the
/// template assembler never sees a blank constraint.
///
/// # Errors
///
/// Fails with [`ValidationErrorKind::EmptyPrompt`] when the prompt is
/// empty or whitespace-only.
pub fn validate(request: &PoemRequest) -> Result<PoemRequest, ValidationError> {
    let prompt = request.prompt().trim();
    if prompt.is_empty() {
        return Err(ValidationError::new(ValidationErrorKind::EmptyPrompt));
    }

    Ok(request
        .clone()
        .with_prompt(prompt.to_string())
        .with_mood(normalize(request.mood()))
        .with_language(normalize(request.language()))
        .with_style(normalize(request.style()))
        .with_length(normalize(request.length()))
        .with_keywords(normalize(request.keywords()))
        .with_rhyme(normalize(request.rhyme())))
}

/// Treat empty and whitespace-only optional values as absent.
fn normalize(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_plain_prompt() {
        let request = PoemRequest::from_prompt("a quiet lake at dawn");
        let validated = validate(&request).unwrap();
        assert_eq!(validated.prompt(), "a quiet lake at dawn");
        assert!(validated.is_bare());
    }

    #[test]
    fn rejects_an_empty_prompt() {
        let request = PoemRequest::from_prompt("");
        let err = validate(&request).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyPrompt);
    }

    #[test]
    fn rejects_a_whitespace_only_prompt() {
        let request = PoemRequest::from_prompt("   \n\t  ");
        let err = validate(&request).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyPrompt);
    }

    #[test]
    fn trims_the_prompt() {
        let request = PoemRequest::from_prompt("  the sea  ");
        let validated = validate(&request).unwrap();
        assert_eq!(validated.prompt(), "the sea");
    }

    #[test]
    fn keeps_present_constraints_and_trims_them() {
        let request = PoemRequest::builder()
            .prompt("the sea")
            .mood(" mysterious ")
            .rhyme("ABAB")
            .build()
            .unwrap();
        let validated = validate(&request).unwrap();
        assert_eq!(validated.mood().as_deref(), Some("mysterious"));
        assert_eq!(validated.rhyme().as_deref(), Some("ABAB"));
    }

    #[test]
    fn blanks_out_empty_constraints() {
        let request = PoemRequest::builder()
            .prompt("the sea")
            .mood("")
            .style("   ")
            .build()
            .unwrap();
        let validated = validate(&request).unwrap();
        assert!(validated.mood().is_none());
        assert!(validated.style().is_none());
        assert!(validated.is_bare());
    }
}
