//! Conversions between pipeline types and the Gemini wire format.

use crate::gemini::config::GeminiConfig;
use crate::gemini::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part, Schema,
};
use std::collections::BTreeMap;
use zakhmverse_core::GeneratedPoem;
use zakhmverse_error::{GeminiError, GeminiErrorKind};

/// The structured output contract: an object with one required `poem`
/// string field.
fn poem_schema() -> Schema {
    let mut properties = BTreeMap::new();
    properties.insert(
        "poem".to_string(),
        Schema {
            schema_type: "STRING".to_string(),
            properties: None,
            required: None,
        },
    );
    Schema {
        schema_type: "OBJECT".to_string(),
        properties: Some(properties),
        required: Some(vec!["poem".to_string()]),
    }
}

/// Build a generateContent request carrying the instruction as a single
/// user turn plus the structured output contract.
pub fn to_generate_content_request(
    instruction: &str,
    config: &GeminiConfig,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: instruction.to_string(),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: poem_schema(),
            temperature: *config.temperature(),
            max_output_tokens: *config.max_output_tokens(),
        },
    }
}

/// Extract the structured poem from a generateContent response.
///
/// The model's JSON answer arrives as text inside the first candidate;
/// several parts are concatenated in order when the API splits it.
///
/// # Errors
///
/// Fails when no candidate carries text, the text is not valid JSON, the
/// JSON lacks a string `poem` field, or the poem is empty.
pub fn from_generate_content_response(
    response: &GenerateContentResponse,
) -> Result<GeneratedPoem, GeminiError> {
    let text = response
        .candidates
        .first()
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<String>()
        })
        .filter(|text| !text.is_empty())
        .ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::ResponseParsing(
                "No candidate content in response".to_string(),
            ))
        })?;

    let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        GeminiError::new(GeminiErrorKind::ResponseParsing(format!(
            "Structured output is not valid JSON: {e}"
        )))
    })?;

    let poem = value
        .get("poem")
        .and_then(|poem| poem.as_str())
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::MissingPoem))?;

    if poem.trim().is_empty() {
        return Err(GeminiError::new(GeminiErrorKind::EmptyPoem));
    }

    Ok(GeneratedPoem::new(poem))
}
