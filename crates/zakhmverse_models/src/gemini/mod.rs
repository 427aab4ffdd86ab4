//! Gemini generateContent API integration.
//!
//! Split into wire shapes (`dto`), conversions between pipeline types and
//! those shapes, and the HTTP client implementing
//! [`zakhmverse_interface::PoemDriver`].

mod client;
mod config;
mod conversions;
mod dto;

pub use client::GeminiClient;
pub use config::{GeminiConfig, GeminiConfigBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use dto::{GenerateContentRequest, GenerateContentResponse};
