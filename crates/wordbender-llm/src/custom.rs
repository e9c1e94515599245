//! Custom OpenAI-compatible provider implementation
//!
//! Covers self-hosted and third-party endpoints that speak the OpenAI
//! chat-completions dialect (vLLM, Together, Groq, local inference servers).
//! The caller supplies the base URL; it is normalized to end in
//! `/chat/completions`.

use crate::chat::{error_message, ChatRequest, ChatResponse};
use crate::retry::{retry_after_hint, with_retries, CallError, RetryPolicy};
use crate::{ClientIdentity, LlmClient, LlmError, ProviderId};
use async_trait::async_trait;
use std::time::Duration;

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Client for OpenAI-compatible endpoints
pub struct CustomClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_url: String,
    policy: RetryPolicy,
}

/// Normalize a base URL so it ends with `/chat/completions`
fn normalize_base_url(base_url: &str) -> String {
    if base_url.ends_with("/chat/completions") {
        base_url.to_string()
    } else {
        format!("{}/chat/completions", base_url.trim_end_matches('/'))
    }
}

impl CustomClient {
    /// Create a new client for an OpenAI-compatible endpoint
    ///
    /// Both the API key and the base URL are required; their absence is a
    /// configuration error raised before any network call.
    pub fn new(
        api_key: impl Into<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, LlmError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(LlmError::Configuration(format!(
                "Custom provider API key is required (set {})",
                ProviderId::Custom.env_var()
            )));
        }
        let base_url = base_url.filter(|u| !u.is_empty()).ok_or_else(|| {
            LlmError::Configuration(
                "Custom provider requires a base URL (set CUSTOM_API_URL)".to_string(),
            )
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| ProviderId::Custom.default_model().to_string()),
            api_url: normalize_base_url(&base_url),
            policy: RetryPolicy::default(),
        })
    }

    /// Override the retry policy
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    async fn call_once(&self, prompt: &str, max_tokens: u32) -> Result<String, CallError> {
        let request = ChatRequest::new(&self.model, prompt, max_tokens);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| CallError::transient(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let parsed: ChatResponse = response.json().await.map_err(|e| {
                CallError::Fatal(LlmError::InvalidResponse(format!(
                    "Failed to parse response from {}: {}",
                    self.api_url, e
                )))
            })?;
            return parsed
                .into_text()
                .filter(|t| !t.trim().is_empty())
                .ok_or_else(|| {
                    CallError::Fatal(LlmError::InvalidResponse(format!(
                        "Empty response content from {}",
                        self.api_url
                    )))
                });
        }

        let retry_after = retry_after_hint(response.headers());
        let body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(CallError::Fatal(LlmError::Rejected(
                "Invalid API key for custom endpoint".to_string(),
            ))),
            400 | 404 => Err(CallError::Fatal(LlmError::Rejected(format!(
                "API error from {}: {}",
                self.api_url,
                error_message(&body)
            )))),
            429 => Err(CallError::Transient {
                message: "Rate limit exceeded".to_string(),
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
impl LlmClient for CustomClient {
    fn identity(&self) -> ClientIdentity {
        ClientIdentity {
            provider: ProviderId::Custom.as_str().to_string(),
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
        let result = CustomClient::new("", None, Some("https://example.com/v1".to_string()));
        assert!(matches!(result, Err(LlmError::Configuration(_))));
    }

    #[test]
    fn test_requires_base_url() {
        let result = CustomClient::new("test-key", None, None);
        assert!(matches!(result, Err(LlmError::Configuration(_))));

        let result = CustomClient::new("test-key", None, Some(String::new()));
        assert!(matches!(result, Err(LlmError::Configuration(_))));
    }

    #[test]
    fn test_base_url_normalization() {
        assert_eq!(
            normalize_base_url("https://api.example.com/v1"),
            "https://api.example.com/v1/chat/completions"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com/v1/"),
            "https://api.example.com/v1/chat/completions"
        );
        assert_eq!(
            normalize_base_url("https://api.example.com/v1/chat/completions"),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_identity() {
        let client = CustomClient::new(
            "test-key",
            Some("llama3-70b".to_string()),
            Some("https://api.example.com/v1".to_string()),
        )
        .unwrap();
        let id = client.identity();
        assert_eq!(id.provider, "custom");
        assert_eq!(id.model, "llama3-70b");
    }
}
