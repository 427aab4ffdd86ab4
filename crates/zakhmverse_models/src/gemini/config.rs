//! Gemini client configuration.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use zakhmverse_error::{ConfigError, ConfigErrorKind, ZakhmverseResult};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// API endpoint used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration for the Gemini generation client.
///
/// Loadable from TOML; every field has a default, so an empty file (or
/// `GeminiConfig::default()`) yields a working production setup. The API
/// key never lives here, it comes from the `GEMINI_API_KEY` environment
/// variable.
///
/// # Examples
///
/// ```
/// use zakhmverse_models::GeminiConfig;
///
/// let config = GeminiConfig::builder()
///     .model("gemini-2.0-flash")
///     .timeout_secs(30u64)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.model(), "gemini-2.0-flash");
/// assert_eq!(*config.timeout_secs(), Some(30));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into))]
pub struct GeminiConfig {
    /// Model identifier, e.g. "gemini-2.0-flash"
    #[serde(default = "default_model")]
    #[builder(default = "default_model()")]
    model: String,
    /// Base URL of the generateContent endpoint
    #[serde(default = "default_base_url")]
    #[builder(default = "default_base_url()")]
    base_url: String,
    /// Transport-level request timeout in seconds; none means reqwest's default
    #[serde(default)]
    #[builder(default)]
    timeout_secs: Option<u64>,
    /// Sampling temperature passed through to the API
    #[serde(default)]
    #[builder(default)]
    temperature: Option<f32>,
    /// Output token ceiling passed through to the API
    #[serde(default)]
    #[builder(default)]
    max_output_tokens: Option<u32>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: None,
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl GeminiConfig {
    /// Create a builder for constructing a configuration.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not parse as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> ZakhmverseResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::FileRead(e.to_string())))?;
        let config = toml::from_str(&content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::TomlParse(e.to_string())))?;
        Ok(config)
    }
}
