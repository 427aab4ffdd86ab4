//! LLM provider integrations for the ZakhmVerse poem generation library.
//!
//! Ships the Gemini REST backend. Any other provider plugs in by
//! implementing [`zakhmverse_interface::PoemDriver`]; the pipeline never
//! knows which backend it talks to.

mod gemini;

pub use gemini::{
    GeminiClient, GeminiConfig, GeminiConfigBuilder, GenerateContentRequest,
    GenerateContentResponse, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
