//! Google Gemini provider for document translation
//!
//! This module sends the translation prompt to the Gemini `generateContent`
//! endpoint and reads the first candidate's first text part.
//!
//! # Authentication
//!
//! The provider loads the API key from the `GEMINI_API_KEY` environment
//! variable. Obtain a key from:
//! https://aistudio.google.com/
//!
//! The model and the API base URL can be overridden with `GEMINI_MODEL` and
//! `GEMINI_API_BASE`.
//!
//! # Example
//!
//! ```ignore
//! use lumina_translate::mt::{Direction, GeminiProvider, MachineTranslator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GeminiProvider::from_env()?;
//!     let result = provider.translate("Hello world", Direction::EnId).await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

use crate::mt::direction::Direction;
use crate::mt::error::{MtError, MtResult};
use crate::mt::prompt::build_prompt;
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error};

/// Environment variable holding the API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable overriding the model name
pub const MODEL_VAR: &str = "GEMINI_MODEL";
/// Environment variable overriding the API base URL
pub const API_BASE_VAR: &str = "GEMINI_API_BASE";

/// Response of `models/{model}:generateContent`, reduced to what is read
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate.
    ///
    /// An empty candidate list, a candidate without content, content without
    /// parts, and a missing or empty text field are all parse failures.
    pub fn into_text(self) -> MtResult<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                MtError::ParseError(
                    "Invalid API response: missing 'candidates[0].content.parts[0].text'"
                        .to_string(),
                )
            })
    }
}

/// Gemini `generateContent` provider
#[derive(Clone)]
pub struct GeminiProvider {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL, without trailing slash
    base_url: String,
    /// Model name, e.g. `gemini-1.5-flash-latest`
    model: String,
}

impl GeminiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-flash-latest";

    /// Create a provider with an explicit API key and no request timeout
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If API key is empty or HTTP client creation fails
    pub fn new(api_key: String) -> MtResult<Self> {
        Self::with_timeout(api_key, None)
    }

    /// Create a provider whose upstream calls give up after `timeout`
    pub fn with_timeout(api_key: String, timeout: Option<Duration>) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| MtError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        })
    }

    /// Create a provider from `GEMINI_API_KEY`, honouring `GEMINI_MODEL` and
    /// `GEMINI_API_BASE` when set
    pub fn from_env() -> MtResult<Self> {
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| {
            MtError::ConfigError(format!("{} environment variable not set", API_KEY_VAR))
        })?;

        let mut provider = Self::new(api_key)?;
        if let Ok(model) = std::env::var(MODEL_VAR) {
            provider = provider.with_model(model);
        }
        if let Ok(base_url) = std::env::var(API_BASE_VAR) {
            provider = provider.with_base_url(base_url);
        }
        Ok(provider)
    }

    /// Point the provider at a different API root (a proxy or a local stub)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send one prompt and return the generated text
    pub async fn generate(&self, prompt: &str) -> MtResult<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!(model = %self.model, prompt_len = prompt.len(), "calling generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(%status, body = %error_text, "Gemini API returned an error status");
            return Err(MtError::UpstreamError(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.into_text()
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl MachineTranslator for GeminiProvider {
    async fn translate(&self, text: &str, direction: Direction) -> MtResult<String> {
        let prompt = build_prompt(direction, text);
        self.generate(&prompt).await
    }

    fn provider_name(&self) -> &str {
        "Google Gemini"
    }
}
