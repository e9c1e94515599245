//! Wordbender LLM Provider Layer
//!
//! Pluggable LLM provider clients behind a common capability interface.
//!
//! # Architecture
//!
//! Every backend implements [`LlmClient`]: identify yourself without I/O, and
//! turn one prompt into one completion. Each client owns its own wire protocol
//! and its own transient-vs-fatal error classification; the shared retry loop
//! in [`retry`] only distinguishes the two classes.
//!
//! # Providers
//!
//! - [`AnthropicClient`]: Anthropic messages API
//! - [`OpenRouterClient`]: OpenRouter chat completions
//! - [`CustomClient`]: any OpenAI-compatible endpoint
//! - [`MockClient`]: deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use wordbender_llm::{LlmClient, MockClient};
//!
//! # tokio_test::block_on(async {
//! let client = MockClient::new("alpha\nbeta\n");
//! let text = client.complete("test prompt", 256).await.unwrap();
//! assert_eq!(text, "alpha\nbeta\n");
//! # });
//! ```

#![warn(missing_docs)]

pub mod anthropic;
mod chat;
pub mod custom;
pub mod factory;
pub mod openrouter;
pub mod provider;
pub mod retry;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use anthropic::AnthropicClient;
pub use custom::CustomClient;
pub use factory::{ProviderRegistry, ProviderSettings};
pub use openrouter::OpenRouterClient;
pub use provider::ProviderId;
pub use retry::RetryPolicy;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Missing or invalid client configuration; raised before any network call
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No client registered under the requested provider identifier
    #[error("Unknown provider '{requested}', known providers: {}", .known.join(", "))]
    UnknownProvider {
        /// The identifier that failed to resolve
        requested: String,
        /// All registered provider identifiers
        known: Vec<String>,
    },

    /// The provider refused the request (auth failure, malformed request);
    /// never retried
    #[error("Provider rejected the request: {0}")]
    Rejected(String),

    /// Transient failures outlasted the retry ceiling
    #[error("Provider unavailable after {attempts} attempts: {last}")]
    Unavailable {
        /// Total attempts made, including the first
        attempts: u32,
        /// The last transient failure observed
        last: String,
    },

    /// The provider answered with something we could not interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Who a client is, without touching the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    /// Provider identifier (e.g. "anthropic")
    pub provider: String,

    /// Model identifier (e.g. "claude-sonnet-4-20250514")
    pub model: String,
}

/// Capability interface over LLM backends
///
/// One `complete` call is one logical request-response cycle, including the
/// client's own bounded retry loop. Clients hold no state between calls and
/// cache nothing.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Provider and model identifiers; must not require a network call
    fn identity(&self) -> ClientIdentity;

    /// Send a prompt, return the raw completion text
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError>;
}

/// Mock LLM client for deterministic testing
///
/// Returns a fixed response, a scripted sequence of outcomes, or a failure
/// when the prompt contains a configured marker. No network calls are made.
///
/// # Examples
///
/// ```
/// use wordbender_llm::{LlmClient, MockClient};
///
/// # tokio_test::block_on(async {
/// let client = MockClient::new("one\ntwo\n");
/// client.fail_if_contains("poison", "bad request");
///
/// assert!(client.complete("normal prompt", 64).await.is_ok());
/// assert!(client.complete("a poison prompt", 64).await.is_err());
/// assert_eq!(client.call_count(), 2);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockClient {
    identity: ClientIdentity,
    default_response: String,
    scripted: Arc<Mutex<VecDeque<Result<String, String>>>>,
    fail_markers: Arc<Mutex<Vec<(String, String)>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockClient {
    /// Create a mock returning a fixed response for every prompt
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            identity: ClientIdentity {
                provider: "mock".to_string(),
                model: "mock-model".to_string(),
            },
            default_response: response.into(),
            scripted: Arc::new(Mutex::new(VecDeque::new())),
            fail_markers: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a response to be returned ahead of the default
    pub fn push_response(&self, response: impl Into<String>) {
        self.scripted
            .lock()
            .unwrap()
            .push_back(Ok(response.into()));
    }

    /// Queue a rejection to be returned ahead of the default
    pub fn push_failure(&self, message: impl Into<String>) {
        self.scripted
            .lock()
            .unwrap()
            .push_back(Err(message.into()));
    }

    /// Reject any prompt containing the given marker
    pub fn fail_if_contains(&self, marker: impl Into<String>, message: impl Into<String>) {
        self.fail_markers
            .lock()
            .unwrap()
            .push((marker.into(), message.into()));
    }

    /// Number of completions requested so far
    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// All prompts seen so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockClient {
    fn identity(&self) -> ClientIdentity {
        self.identity.clone()
    }

    async fn complete(&self, prompt: &str, _max_tokens: u32) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        for (marker, message) in self.fail_markers.lock().unwrap().iter() {
            if prompt.contains(marker.as_str()) {
                return Err(LlmError::Rejected(message.clone()));
            }
        }

        if let Some(outcome) = self.scripted.lock().unwrap().pop_front() {
            return outcome.map_err(LlmError::Rejected);
        }

        Ok(self.default_response.clone())
    }
}
