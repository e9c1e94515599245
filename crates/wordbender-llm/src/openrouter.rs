//! OpenRouter provider implementation
//!
//! OpenRouter speaks the OpenAI chat-completions dialect and routes to many
//! underlying models; model identifiers look like `anthropic/claude-3.5-sonnet`.

use crate::chat::{error_message, ChatRequest, ChatResponse};
use crate::retry::{retry_after_hint, with_retries, CallError, RetryPolicy};
use crate::{ClientIdentity, LlmClient, LlmError, ProviderId};
use async_trait::async_trait;
use std::time::Duration;

/// OpenRouter chat completions endpoint
pub const API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

const DEFAULT_REFERER: &str = "http://localhost";
const APP_TITLE: &str = "Wordbender";

/// OpenRouter API client
pub struct OpenRouterClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_url: String,
    policy: RetryPolicy,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client
    pub fn new(api_key: impl Into<String>, model: Option<String>) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::Configuration(format!(
                "OpenRouter API key is required (set {})",
                ProviderId::OpenRouter.env_var()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| ProviderId::OpenRouter.default_model().to_string()),
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
        let request = ChatRequest::new(&self.model, prompt, max_tokens);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("HTTP-Referer", DEFAULT_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&request)
            .send()
            .await
            .map_err(|e| CallError::transient(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let parsed: ChatResponse = response.json().await.map_err(|e| {
                CallError::Fatal(LlmError::InvalidResponse(format!(
                    "Failed to parse OpenRouter response: {}",
                    e
                )))
            })?;
            return parsed.into_text().filter(|t| !t.trim().is_empty()).ok_or_else(|| {
                CallError::Fatal(LlmError::InvalidResponse(
                    "Empty response content from OpenRouter".to_string(),
                ))
            });
        }

        let retry_after = retry_after_hint(response.headers());
        let body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(CallError::Fatal(LlmError::Rejected(
                "Invalid API key for OpenRouter".to_string(),
            ))),
            400 | 404 => Err(CallError::Fatal(LlmError::Rejected(format!(
                "OpenRouter API error: {}",
                error_message(&body)
            )))),
            429 => Err(CallError::Transient {
                message: "OpenRouter API rate limit exceeded".to_string(),
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
impl LlmClient for OpenRouterClient {
    fn identity(&self) -> ClientIdentity {
        ClientIdentity {
            provider: ProviderId::OpenRouter.as_str().to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_api_key() {
        let result = OpenRouterClient::new("", None);
        assert!(matches!(result, Err(LlmError::Configuration(_))));
    }

    #[test]
    fn test_default_model() {
        let client = OpenRouterClient::new("test-key", None).unwrap();
        assert_eq!(client.identity().model, ProviderId::OpenRouter.default_model());
    }

    #[test]
    fn test_custom_model() {
        let client =
            OpenRouterClient::new("test-key", Some("openai/gpt-4-turbo".to_string())).unwrap();
        let id = client.identity();
        assert_eq!(id.provider, "openrouter");
        assert_eq!(id.model, "openai/gpt-4-turbo");
    }
}
