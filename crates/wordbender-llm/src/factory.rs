//! Provider registry - resolve provider identifiers to clients
//!
//! The registry is populated with the built-in providers at process start;
//! new backends register a constructor without touching orchestration code.
//! Resolving an unknown identifier fails with the known identifiers listed -
//! never a silent fallback.

use crate::{AnthropicClient, CustomClient, LlmClient, LlmError, OpenRouterClient, ProviderId};
use std::collections::BTreeMap;

/// Everything a client constructor needs, resolved by the caller beforehand
#[derive(Debug, Clone, Default)]
pub struct ProviderSettings {
    /// API key for the provider; must be present before any network call
    pub api_key: String,

    /// Model override; the provider's default is used when absent
    pub model: Option<String>,

    /// Endpoint base URL; required by the custom provider only
    pub base_url: Option<String>,
}

impl ProviderSettings {
    /// Settings with just an API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: None,
            base_url: None,
        }
    }

    /// Set the model override
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the endpoint base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }
}

/// Constructor for one provider's client
pub type ClientBuilder = fn(&ProviderSettings) -> Result<Box<dyn LlmClient>, LlmError>;

/// Registry mapping provider identifiers to client constructors
pub struct ProviderRegistry {
    builders: BTreeMap<String, ClientBuilder>,
}

fn build_anthropic(settings: &ProviderSettings) -> Result<Box<dyn LlmClient>, LlmError> {
    Ok(Box::new(AnthropicClient::new(
        settings.api_key.clone(),
        settings.model.clone(),
    )?))
}

fn build_openrouter(settings: &ProviderSettings) -> Result<Box<dyn LlmClient>, LlmError> {
    Ok(Box::new(OpenRouterClient::new(
        settings.api_key.clone(),
        settings.model.clone(),
    )?))
}

fn build_custom(settings: &ProviderSettings) -> Result<Box<dyn LlmClient>, LlmError> {
    Ok(Box::new(CustomClient::new(
        settings.api_key.clone(),
        settings.model.clone(),
        settings.base_url.clone(),
    )?))
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }

    /// Create a registry with the built-in providers registered
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(ProviderId::Anthropic.as_str(), build_anthropic);
        registry.register(ProviderId::OpenRouter.as_str(), build_openrouter);
        registry.register(ProviderId::Custom.as_str(), build_custom);
        registry
    }

    /// Register a client constructor under a provider identifier
    pub fn register(&mut self, id: impl Into<String>, builder: ClientBuilder) {
        self.builders.insert(id.into(), builder);
    }

    /// All registered provider identifiers, sorted
    pub fn names(&self) -> Vec<String> {
        self.builders.keys().cloned().collect()
    }

    /// Construct a client for the given provider identifier
    pub fn resolve(
        &self,
        provider: &str,
        settings: &ProviderSettings,
    ) -> Result<Box<dyn LlmClient>, LlmError> {
        let builder = self
            .builders
            .get(provider)
            .ok_or_else(|| LlmError::UnknownProvider {
                requested: provider.to_string(),
                known: self.names(),
            })?;
        builder(settings)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
