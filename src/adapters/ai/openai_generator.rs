//! OpenAI Generator - Implementation of TextGenerator for OpenAI's chat API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OpenAiGeneratorConfig::new(api_key)
//!     .with_model("gpt-4o")
//!     .with_base_url("https://api.openai.com/v1");
//!
//! let generator = OpenAiGenerator::new(config)?;
//! ```
//!
//! The adapter makes exactly one request per `generate` call. Retries belong
//! to the repair orchestrator, which re-prompts with fresh feedback.

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{AiConfig, ValidationError};
use crate::ports::{GenerationFailure, GenerationPrompt, TextGenerator};

/// Configuration for the OpenAI generator.
#[derive(Debug, Clone)]
pub struct OpenAiGeneratorConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-4o").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Sampling temperature.
    pub temperature: f32,
    /// Completion token cap, provider default when unset.
    pub max_tokens: Option<u32>,
}

impl OpenAiGeneratorConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(120),
            temperature: 0.7,
            max_tokens: None,
        }
    }

    /// Builds the adapter configuration from the `ai` config section.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequired` when no API key is configured.
    pub fn from_settings(settings: &AiConfig) -> Result<Self, ValidationError> {
        if !settings.has_openai() {
            return Err(ValidationError::MissingRequired("ai.openai_api_key"));
        }
        let api_key = settings.openai_api_key.clone().unwrap_or_default();

        let mut config = Self::new(api_key)
            .with_model(settings.model.clone())
            .with_base_url(settings.base_url.clone())
            .with_timeout(settings.timeout())
            .with_temperature(settings.temperature);
        config.max_tokens = settings.max_tokens;
        Ok(config)
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Caps completion tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// OpenAI chat-completions generator.
pub struct OpenAiGenerator {
    config: OpenAiGeneratorConfig,
    client: Client,
}

impl OpenAiGenerator {
    /// Creates a generator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `Network` if the HTTP client cannot be built.
    pub fn new(config: OpenAiGeneratorConfig) -> Result<Self, GenerationFailure> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationFailure::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Converts a prompt to OpenAI's request format.
    fn to_openai_request(&self, prompt: &GenerationPrompt) -> OpenAiRequest {
        OpenAiRequest {
            model: self.config.model.clone(),
            messages: vec![
                OpenAiMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                OpenAiMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            temperature: Some(self.config.temperature),
            max_tokens: self.config.max_tokens,
        }
    }

    /// Sends a request.
    async fn send_request(&self, prompt: &GenerationPrompt) -> Result<Response, GenerationFailure> {
        self.client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&self.to_openai_request(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationFailure::timeout(self.config.timeout)
                } else if e.is_connect() {
                    GenerationFailure::network(format!("Connection failed: {}", e))
                } else {
                    GenerationFailure::network(e.to_string())
                }
            })
    }

    /// Parses the API response status and maps errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, GenerationFailure> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(classify_status(status.as_u16(), &error_body))
    }

    /// Parses a successful response body into the completion text.
    async fn parse_response(&self, response: Response) -> Result<String, GenerationFailure> {
        let response = self.handle_response_status(response).await?;

        let body = response
            .text()
            .await
            .map_err(|e| GenerationFailure::network(format!("Failed to read response: {}", e)))?;

        extract_content(&body)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String, GenerationFailure> {
        tracing::debug!(
            model = %self.config.model,
            prompt_chars = prompt.system.len() + prompt.user.len(),
            "Sending chat completion request"
        );

        let response = self.send_request(prompt).await?;
        self.parse_response(response).await
    }

    fn name(&self) -> &str {
        "openai"
    }
}

/// Maps a non-success HTTP status onto a generation failure.
fn classify_status(status: u16, error_body: &str) -> GenerationFailure {
    match status {
        401 | 403 => GenerationFailure::AuthenticationFailed,
        408 => GenerationFailure::unavailable(format!("Request timeout: {}", error_body)),
        429 => GenerationFailure::rate_limited(parse_retry_after(error_body)),
        500..=599 => {
            GenerationFailure::unavailable(format!("Server error {}: {}", status, error_body))
        }
        _ => GenerationFailure::invalid_response(format!(
            "Unexpected status {}: {}",
            status, error_body
        )),
    }
}

/// Parses retry-after from an error response, defaulting to 30 seconds.
fn parse_retry_after(error_body: &str) -> u32 {
    if let Ok(parsed) = serde_json::from_str::<serde_json::Value>(error_body) {
        if let Some(msg) = parsed
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            if let Some(idx) = msg.find("try again in ") {
                let rest = &msg[idx + 13..];
                let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
                if let Ok(secs) = digits.parse::<u32>() {
                    return secs;
                }
            }
        }
    }
    30
}

/// Pulls the first choice's text out of a chat completion body.
fn extract_content(body: &str) -> Result<String, GenerationFailure> {
    let parsed: OpenAiResponse = serde_json::from_str(body)
        .map_err(|e| GenerationFailure::invalid_response(format!("Failed to parse response: {}", e)))?;

    let choice = parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| GenerationFailure::invalid_response("No choices in response"))?;

    match choice.message.content {
        Some(content) if !content.trim().is_empty() => Ok(content),
        _ => Err(GenerationFailure::EmptyResponse),
    }
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}
