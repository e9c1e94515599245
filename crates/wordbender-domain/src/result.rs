//! Generation result module

/// The outcome of one successful generation request
///
/// Words are unique, validated, and in first-seen order; `words.len()` never
/// exceeds `requested`. The result owns its data - the generator retains
/// nothing after returning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// The validated, deduplicated words, first-seen order
    pub words: Vec<String>,

    /// Wordlist kind name this result was generated for
    pub kind: String,

    /// Seed words that anchored the generation
    pub seeds: Vec<String>,

    /// Provider that produced the completion
    pub provider: String,

    /// Model that produced the completion
    pub model: String,

    /// The target length that was requested
    pub requested: usize,
}

impl GenerationResult {
    /// Number of words actually produced
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// Whether the pool of valid unique words fell short of the target
    ///
    /// A short result is a warning signal to the caller, not an error.
    pub fn is_short(&self) -> bool {
        self.words.len() < self.requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(words: Vec<&str>, requested: usize) -> GenerationResult {
        GenerationResult {
            words: words.into_iter().map(String::from).collect(),
            kind: "password".to_string(),
            seeds: vec!["seed".to_string()],
            provider: "anthropic".to_string(),
            model: "test-model".to_string(),
            requested,
        }
    }

    #[test]
    fn test_count() {
        let result = result_with(vec!["alpha", "beta"], 5);
        assert_eq!(result.count(), 2);
    }

    #[test]
    fn test_is_short() {
        assert!(result_with(vec!["alpha"], 5).is_short());
        assert!(!result_with(vec!["alpha", "beta"], 2).is_short());
    }
}
