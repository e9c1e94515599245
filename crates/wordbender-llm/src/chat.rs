//! Shared pieces for OpenAI-style chat-completions backends

use serde::{Deserialize, Serialize};

/// System prompt shared by all providers
pub(crate) const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates wordlists for security testing.";

/// Sampling temperature shared by all providers
pub(crate) const TEMPERATURE: f32 = 0.7;

/// Request body for a chat completions endpoint
#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Build a request with the shared system prompt and one user message
    pub fn new(model: &str, prompt: &str, max_tokens: u32) -> Self {
        Self {
            model: model.to_string(),
            max_tokens,
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
        }
    }
}

/// One chat message
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Response from a chat completions endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

/// One completion choice
#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatResponse {
    /// The first choice's text, if any
    pub fn into_text(self) -> Option<String> {
        self.choices.into_iter().next().map(|c| c.message.content)
    }
}

/// Best-effort extraction of an error message from a provider error body
///
/// Both Anthropic and OpenAI-style APIs wrap errors as
/// `{"error": {"message": "..."}}`; anything else falls back to the raw body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}
