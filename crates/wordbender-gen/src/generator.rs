//! The generation pipeline
//!
//! One request moves through prompt construction, completion, parsing,
//! validation, and sizing. Only the completion stage can block; everything
//! downstream is a pure function of the raw response text.

use crate::config::GenConfig;
use crate::error::GenError;
use crate::parser::parse_completion;
use crate::profile::WordlistProfile;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use wordbender_domain::{GenerationRequest, GenerationResult};
use wordbender_llm::LlmClient;

/// Drives generation requests for one wordlist profile
pub struct Generator {
    profile: Arc<dyn WordlistProfile>,
    config: GenConfig,
}

impl Generator {
    /// Create a generator for a profile with default configuration
    pub fn new(profile: Arc<dyn WordlistProfile>) -> Self {
        Self {
            profile,
            config: GenConfig::default(),
        }
    }

    /// Override the pipeline configuration
    pub fn with_config(mut self, config: GenConfig) -> Self {
        self.config = config;
        self
    }

    /// The profile this generator produces words for
    pub fn profile(&self) -> &dyn WordlistProfile {
        self.profile.as_ref()
    }

    /// Build the prompt for a request without calling the provider
    ///
    /// This is the preview path: no network, no side effects.
    pub fn preview(&self, request: &GenerationRequest) -> String {
        self.build_prompt(request)
    }

    /// Run one request through the full pipeline
    pub async fn generate(
        &self,
        client: &dyn LlmClient,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenError> {
        let target = request.target_length();
        let prompt = self.build_prompt(request);
        debug!("Prompt length: {} chars", prompt.len());

        let max_tokens = self.config.estimate_tokens(&prompt, target);
        let raw = client.complete(&prompt, max_tokens).await?;
        debug!("Completion length: {} chars", raw.len());

        let candidates = parse_completion(&raw);
        info!(
            "Parsed {} candidate words for kind '{}'",
            candidates.len(),
            self.profile.name()
        );

        let (words, invalid) = self.select_words(candidates, target);
        if invalid > 0 {
            debug!("{} candidates failed validation", invalid);
        }
        if words.is_empty() {
            return Err(GenError::EmptyYield);
        }
        if words.len() < target {
            warn!(
                "Produced {} of {} requested words for kind '{}'",
                words.len(),
                target,
                self.profile.name()
            );
        }

        let identity = client.identity();
        Ok(GenerationResult {
            words,
            kind: self.profile.name().to_string(),
            seeds: request.seeds().to_vec(),
            provider: identity.provider,
            model: identity.model,
            requested: target,
        })
    }

    fn build_prompt(&self, request: &GenerationRequest) -> String {
        let base = self
            .profile
            .prompt(request.seeds(), request.target_length());

        match request.extra_instructions() {
            Some(extra) => format!("{}\n\nAdditional instructions: {}", base, extra),
            None => base,
        }
    }

    /// Validate, dedupe (case-sensitive, first-seen order), and truncate
    fn select_words(&self, candidates: Vec<String>, target: usize) -> (Vec<String>, usize) {
        let mut seen: HashSet<String> = HashSet::new();
        let mut words = Vec::new();
        let mut invalid = 0;

        for candidate in candidates {
            if words.len() == target {
                break;
            }
            if seen.contains(&candidate) {
                continue;
            }
            if self.profile.is_valid(&candidate) {
                seen.insert(candidate.clone());
                words.push(candidate);
            } else {
                invalid += 1;
            }
        }

        (words, invalid)
    }
}
