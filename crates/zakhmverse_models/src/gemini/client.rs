//! Gemini generateContent client.

use crate::gemini::config::GeminiConfig;
use crate::gemini::conversions;
use crate::gemini::dto::GenerateContentResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};
use zakhmverse_core::GeneratedPoem;
use zakhmverse_error::{GeminiError, GeminiErrorKind, ZakhmverseResult};
use zakhmverse_interface::PoemDriver;

const API_KEY_HEADER: &str = "x-goog-api-key";
const API_KEY_ENV: &str = "GEMINI_API_KEY";
const PROVIDER_NAME: &str = "gemini";

/// Client for the Gemini generateContent REST API.
///
/// Sends the assembled instruction as one user turn with the structured
/// output contract attached, and parses the contracted `{"poem": ...}`
/// answer. Each call is exactly one HTTP request; failures surface as
/// typed errors for the pipeline boundary to shape.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"[REDACTED]")
            .field("config", &self.config)
            .finish()
    }
}

impl GeminiClient {
    /// Create a client from an explicit API key and configuration.
    ///
    /// # Errors
    ///
    /// Fails when the underlying HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>, config: GeminiConfig) -> ZakhmverseResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs() {
            builder = builder.timeout(Duration::from_secs(*secs));
        }
        let client = builder
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(model = %config.model(), base_url = %config.base_url(), "Created Gemini client");

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    /// Create a client reading the API key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Fails when the variable is unset or the HTTP client cannot be
    /// constructed.
    pub fn from_env(config: GeminiConfig) -> ZakhmverseResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::new(api_key, config)
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url().trim_end_matches('/'),
            self.config.model()
        )
    }

    async fn send_request(&self, instruction: &str) -> Result<GeneratedPoem, GeminiError> {
        let request = conversions::to_generate_content_request(instruction, &self.config);

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(provider = PROVIDER_NAME, error = %e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {e}")))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                provider = PROVIDER_NAME,
                status = %status,
                error = %error_text,
                "API returned error status"
            );
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(provider = PROVIDER_NAME, error = %e, "Failed to parse response body");
            GeminiError::new(GeminiErrorKind::ResponseParsing(format!(
                "Failed to parse JSON response: {e}"
            )))
        })?;

        if let Some(usage) = &body.usage_metadata {
            debug!(
                provider = PROVIDER_NAME,
                prompt_tokens = ?usage.prompt_token_count,
                output_tokens = ?usage.candidates_token_count,
                total_tokens = ?usage.total_token_count,
                "Received response"
            );
        }

        conversions::from_generate_content_response(&body)
    }
}

#[async_trait]
impl PoemDriver for GeminiClient {
    #[instrument(skip(self, instruction), fields(provider = PROVIDER_NAME, model = %self.config.model()))]
    async fn generate(&self, instruction: &str) -> ZakhmverseResult<GeneratedPoem> {
        debug!(instruction_len = instruction.len(), "Sending generation request");
        let poem = self.send_request(instruction).await?;
        Ok(poem)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
