//! Known provider identities and their key-resolution metadata

/// A known LLM provider
///
/// Carries the identifier used on the command line and in configuration, the
/// display name for interactive output, the environment variable holding its
/// API key, and the model used when the caller does not override one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    /// Anthropic messages API
    Anthropic,

    /// OpenRouter model aggregator
    OpenRouter,

    /// A caller-supplied OpenAI-compatible endpoint
    Custom,
}

impl ProviderId {
    /// Get the provider identifier as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Anthropic => "anthropic",
            ProviderId::OpenRouter => "openrouter",
            ProviderId::Custom => "custom",
        }
    }

    /// Parse a provider from its identifier
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "anthropic" => Some(ProviderId::Anthropic),
            "openrouter" => Some(ProviderId::OpenRouter),
            "custom" => Some(ProviderId::Custom),
            _ => None,
        }
    }

    /// Human-readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::Anthropic => "Anthropic",
            ProviderId::OpenRouter => "OpenRouter",
            ProviderId::Custom => "Custom",
        }
    }

    /// Environment variable the API key is read from
    pub fn env_var(&self) -> &'static str {
        match self {
            ProviderId::Anthropic => "ANTHROPIC_API_KEY",
            ProviderId::OpenRouter => "OPENROUTER_API_KEY",
            ProviderId::Custom => "CUSTOM_API_KEY",
        }
    }

    /// Model used when no override is given
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderId::Anthropic => "claude-sonnet-4-20250514",
            ProviderId::OpenRouter => "anthropic/claude-3.5-sonnet",
            ProviderId::Custom => "gpt-4o-mini",
        }
    }

    /// All known providers, in display order
    pub fn all() -> [ProviderId; 3] {
        [
            ProviderId::Anthropic,
            ProviderId::OpenRouter,
            ProviderId::Custom,
        ]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid provider: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for provider in ProviderId::all() {
            assert_eq!(ProviderId::parse(provider.as_str()), Some(provider));
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(ProviderId::parse("Anthropic"), Some(ProviderId::Anthropic));
        assert_eq!(
            ProviderId::parse("OPENROUTER"),
            Some(ProviderId::OpenRouter)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(ProviderId::parse("openai"), None);
        assert_eq!(ProviderId::parse(""), None);
    }

    #[test]
    fn test_env_vars_are_distinct() {
        let vars: Vec<_> = ProviderId::all().iter().map(|p| p.env_var()).collect();
        let mut deduped = vars.clone();
        deduped.dedup();
        assert_eq!(vars.len(), deduped.len());
    }
}
