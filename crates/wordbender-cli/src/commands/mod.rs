//! Command implementations.

mod batch;
mod config;
mod generate;

pub use batch::execute_batch;
pub use config::execute_config;
pub use generate::execute_generate;

use crate::config::Config;
use crate::error::{CliError, Result};
use wordbender_llm::{LlmClient, ProviderId, ProviderRegistry};

/// Resolve a provider name (or the configured default) to a ready client.
pub(crate) fn resolve_client(
    config: &Config,
    provider_arg: Option<&str>,
    model: Option<String>,
) -> Result<(ProviderId, Box<dyn LlmClient>)> {
    let name = provider_arg.unwrap_or(&config.settings.default_provider);
    let registry = ProviderRegistry::with_builtins();

    let provider = ProviderId::parse(name).ok_or_else(|| {
        CliError::Llm(wordbender_llm::LlmError::UnknownProvider {
            requested: name.to_string(),
            known: registry.names(),
        })
    })?;

    let settings = config.provider_settings(provider, model)?;
    let client = registry.resolve(provider.as_str(), &settings)?;
    Ok((provider, client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_client_unknown_provider() {
        let config = Config::default();
        let result = resolve_client(&config, Some("openai"), None);
        assert!(matches!(
            result,
            Err(CliError::Llm(
                wordbender_llm::LlmError::UnknownProvider { .. }
            ))
        ));
    }

    #[test]
    fn test_resolve_client_with_stored_key() {
        let mut config = Config::default();
        config.set_api_key(ProviderId::Anthropic, "test-key");

        let (provider, client) = resolve_client(&config, Some("anthropic"), None).unwrap();
        assert_eq!(provider, ProviderId::Anthropic);
        assert_eq!(client.identity().provider, "anthropic");
    }
}
