//! Configuration for the generation pipeline

use serde::{Deserialize, Serialize};

/// Hard ceiling on the completion token budget
pub const TOKEN_CEILING: u32 = 4000;

/// Configuration for the generation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    /// Upper bound on requested completion tokens
    pub max_response_tokens: u32,
}

impl GenConfig {
    /// Estimate the completion token budget for a request
    ///
    /// Roughly 1.5 tokens per prompt word plus 2 tokens per requested output
    /// word plus slack, clamped to the configured ceiling.
    pub fn estimate_tokens(&self, prompt: &str, target_length: usize) -> u32 {
        let prompt_tokens = (prompt.split_whitespace().count() as f64 * 1.5) as u32;
        let output_tokens = (target_length as u32).saturating_mul(2);
        prompt_tokens
            .saturating_add(output_tokens)
            .saturating_add(50)
            .min(self.max_response_tokens)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_response_tokens == 0 {
            return Err("max_response_tokens must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            max_response_tokens: TOKEN_CEILING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GenConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tokens_invalid() {
        let config = GenConfig {
            max_response_tokens: 0,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_estimate_scales_with_target() {
        let config = GenConfig::default();
        let small = config.estimate_tokens("one two three", 10);
        let large = config.estimate_tokens("one two three", 100);
        assert!(large > small);
    }

    #[test]
    fn test_estimate_capped() {
        let config = GenConfig::default();
        let estimate = config.estimate_tokens("seed", 100_000);
        assert_eq!(estimate, TOKEN_CEILING);
    }

    #[test]
    fn test_toml_round_trip() {
        let parsed = GenConfig::from_toml("max_response_tokens = 2000").unwrap();
        assert_eq!(parsed.max_response_tokens, 2000);
    }
}
