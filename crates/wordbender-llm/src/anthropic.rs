//! Anthropic provider implementation
//!
//! Talks to the Anthropic messages API. Owns its request/response shapes and
//! its own classification of which HTTP outcomes are worth retrying.

use crate::chat::{error_message, SYSTEM_PROMPT, TEMPERATURE};
use crate::retry::{retry_after_hint, with_retries, CallError, RetryPolicy};
use crate::{ClientIdentity, LlmClient, LlmError, ProviderId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Anthropic messages endpoint
pub const API_URL: &str = "https://api.anthropic.com/v1/messages";

/// API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Anthropic messages API client
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_url: String,
    policy: RetryPolicy,
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: String,
}

impl AnthropicClient {
    /// Create a new Anthropic client
    ///
    /// The API key must be non-empty; its absence is a configuration error
    /// raised here, before any network call.
    pub fn new(api_key: impl Into<String>, model: Option<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::Configuration(format!(
                "Anthropic API key is required (set {})",
                ProviderId::Anthropic.env_var()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| ProviderId::Anthropic.default_model().to_string()),
            api_url: API_URL.to_string(),
            policy: RetryPolicy::default(),
        })
    }

    /// Override the retry policy
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Override the endpoint URL
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    async fn call_once(&self, prompt: &str, max_tokens: u32) -> Result<String, CallError> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens,
            temperature: TEMPERATURE,
            system: SYSTEM_PROMPT.to_string(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CallError::transient(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let parsed: MessagesResponse = response.json().await.map_err(|e| {
                CallError::Fatal(LlmError::InvalidResponse(format!(
                    "Failed to parse Anthropic response: {}",
                    e
                )))
            })?;
            return parsed
                .content
                .into_iter()
                .next()
                .map(|block| block.text)
                .ok_or_else(|| {
                    CallError::Fatal(LlmError::InvalidResponse(
                        "No text content in Anthropic response".to_string(),
                    ))
                });
        }

        let retry_after = retry_after_hint(response.headers());
        let body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(CallError::Fatal(LlmError::Rejected(
                "Invalid API key for Anthropic".to_string(),
            ))),
            400 => Err(CallError::Fatal(LlmError::Rejected(format!(
                "Anthropic API error: {}",
                error_message(&body)
            )))),
            404 => Err(CallError::Fatal(LlmError::Rejected(format!(
                "Model not available: {}",
                self.model
            )))),
            429 => Err(CallError::Transient {
                message: "Anthropic API rate limit exceeded".to_string(),
                retry_after,
            }),
            _ => Err(CallError::transient(format!(
                "HTTP {}: {}",
                status,
                error_message(&body)
            ))),
        }
    }
}

#[async_trait]
impl LlmClient for AnthropicClient {
    fn identity(&self) -> ClientIdentity {
        ClientIdentity {
            provider: ProviderId::Anthropic.as_str().to_string(),
            model: self.model.clone(),
        }
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        with_retries(
            &self.policy,
            move |_| self.call_once(prompt, max_tokens),
            |d| tokio::time::sleep(d),
        )
        .await
    }
}
