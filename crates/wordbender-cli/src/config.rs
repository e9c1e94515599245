//! Configuration management for the CLI.
//!
//! Preferences and stored API keys live in `~/.wordbender/config.toml`.
//! Environment variables always win over stored keys, including a
//! `WORDBENDER_`-prefixed namespace-safe fallback.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use wordbender_llm::{ProviderId, ProviderSettings};

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Stored API keys, keyed by provider identifier
    #[serde(default)]
    pub keys: HashMap<String, String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Provider used when none is given on the command line
    #[serde(default = "default_provider")]
    pub default_provider: String,

    /// Wordlist kind preselected in interactive mode
    #[serde(default = "default_kind")]
    pub default_kind: String,

    /// Target length used when none is given
    #[serde(default = "default_length")]
    pub default_length: usize,

    /// Directory default output files are written into
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Append to existing output files by default
    #[serde(default)]
    pub append_by_default: bool,

    /// Base URL for the custom OpenAI-compatible provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_api_url: Option<String>,
}

fn default_provider() -> String {
    "openrouter".to_string()
}

fn default_kind() -> String {
    "password".to_string()
}

fn default_length() -> usize {
    100
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            default_kind: default_kind(),
            default_length: default_length(),
            output_directory: None,
            append_by_default: false,
            custom_api_url: None,
        }
    }
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".wordbender").join("config.toml"))
    }

    /// Load configuration from the default path, or create defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a specific path, or create defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the API key for a provider.
    ///
    /// Precedence: the provider's environment variable, then the
    /// `WORDBENDER_`-prefixed variant, then the stored key.
    pub fn api_key(&self, provider: ProviderId) -> Option<String> {
        let env_var = provider.env_var();
        if let Ok(value) = std::env::var(env_var) {
            if !value.is_empty() {
                return Some(value);
            }
        }
        if let Ok(value) = std::env::var(format!("WORDBENDER_{}", env_var)) {
            if !value.is_empty() {
                return Some(value);
            }
        }
        self.keys.get(provider.as_str()).cloned()
    }

    /// Store an API key for a provider.
    pub fn set_api_key(&mut self, provider: ProviderId, key: impl Into<String>) {
        self.keys.insert(provider.as_str().to_string(), key.into());
    }

    /// Whether a usable API key exists for a provider.
    pub fn has_api_key(&self, provider: ProviderId) -> bool {
        self.api_key(provider).is_some()
    }

    /// Build provider settings for a client, failing without a key.
    pub fn provider_settings(
        &self,
        provider: ProviderId,
        model: Option<String>,
    ) -> Result<ProviderSettings> {
        let api_key = self.api_key(provider).ok_or_else(|| {
            CliError::Config(format!(
                "No API key configured for {} (set {} or run 'wordbender config --setup')",
                provider.display_name(),
                provider.env_var()
            ))
        })?;

        let mut settings = ProviderSettings::new(api_key);
        if let Some(model) = model {
            settings = settings.with_model(model);
        }

        if provider == ProviderId::Custom {
            let base_url = std::env::var("CUSTOM_API_URL")
                .ok()
                .filter(|u| !u.is_empty())
                .or_else(|| self.settings.custom_api_url.clone());
            if let Some(base_url) = base_url {
                settings = settings.with_base_url(base_url);
            }
        }

        Ok(settings)
    }

    /// Resolve the output path for a default filename.
    pub fn output_path(&self, default_filename: &str) -> PathBuf {
        match &self.settings.output_directory {
            Some(dir) => dir.join(default_filename),
            None => PathBuf::from(default_filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let config = Config::default();
        assert_eq!(config.settings.default_provider, "openrouter");
        assert_eq!(config.settings.default_kind, "password");
        assert_eq!(config.settings.default_length, 100);
        assert!(!config.settings.append_by_default);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.default_length, 100);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.default_provider = "anthropic".to_string();
        config.settings.default_length = 250;
        config.set_api_key(ProviderId::OpenRouter, "or-test-key");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.default_provider, "anthropic");
        assert_eq!(loaded.settings.default_length, 250);
        assert_eq!(
            loaded.keys.get("openrouter").map(String::as_str),
            Some("or-test-key")
        );
    }

    #[test]
    fn test_partial_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[settings]\ndefault_length = 42\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.default_length, 42);
        assert_eq!(config.settings.default_provider, "openrouter");
    }

    #[test]
    fn test_stored_key_resolution() {
        let mut config = Config::default();
        config.set_api_key(ProviderId::OpenRouter, "stored-key");
        assert!(config.has_api_key(ProviderId::OpenRouter));
        // An ambient OPENROUTER_API_KEY in the environment wins over the
        // stored key; without one, the stored key is returned
        if std::env::var("OPENROUTER_API_KEY").is_err()
            && std::env::var("WORDBENDER_OPENROUTER_API_KEY").is_err()
        {
            assert_eq!(
                config.api_key(ProviderId::OpenRouter).as_deref(),
                Some("stored-key")
            );
        }
    }

    #[test]
    fn test_provider_settings_requires_key() {
        let config = Config::default();
        // Custom provider keys come from CUSTOM_API_KEY, unlikely to be set
        // in test environments; a missing key is a configuration error
        if std::env::var("CUSTOM_API_KEY").is_err() {
            let result = config.provider_settings(ProviderId::Custom, None);
            assert!(matches!(result, Err(CliError::Config(_))));
        }
    }

    #[test]
    fn test_provider_settings_carries_model_and_base_url() {
        let mut config = Config::default();
        config.set_api_key(ProviderId::Custom, "custom-key");
        config.settings.custom_api_url = Some("https://llm.internal/v1".to_string());

        let settings = config
            .provider_settings(ProviderId::Custom, Some("llama3-70b".to_string()))
            .unwrap();
        assert_eq!(settings.model.as_deref(), Some("llama3-70b"));
        assert!(settings.base_url.is_some());
    }

    #[test]
    fn test_output_path_uses_configured_directory() {
        let mut config = Config::default();
        assert_eq!(
            config.output_path("subdomain_wordlist.txt"),
            PathBuf::from("subdomain_wordlist.txt")
        );

        config.settings.output_directory = Some(PathBuf::from("/tmp/lists"));
        assert_eq!(
            config.output_path("subdomain_wordlist.txt"),
            PathBuf::from("/tmp/lists/subdomain_wordlist.txt")
        );
    }
}
