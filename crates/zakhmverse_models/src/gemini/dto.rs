//! Data transfer objects for the Gemini generateContent API.
//!
//! Wire shapes only; pipeline types convert through `conversions`. Field
//! names follow the API's camelCase JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A content block: one turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered message parts
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Text payload
    pub text: String,
}

/// OpenAPI-style schema subset accepted by the Gemini API.
///
/// Properties use a `BTreeMap` so serialization order is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schema {
    /// Schema type: "OBJECT", "STRING", ...
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Property schemas, for OBJECT types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    /// Required property names, for OBJECT types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// Generation parameters, including the structured output contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// MIME type the model must produce
    pub response_mime_type: String,
    /// JSON schema the response must honor
    pub response_schema: Schema,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Output token ceiling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation so far; a single user turn here
    pub contents: Vec<Content>,
    /// Generation parameters
    pub generation_config: GenerationConfig,
}

/// One candidate completion in the response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content, absent for blocked candidates
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped, e.g. "STOP" or "MAX_TOKENS"
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token accounting reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    /// Tokens across candidates
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    /// Prompt plus candidates
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

/// Response body from `models/{model}:generateContent`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate completions, usually exactly one
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Token accounting
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}
