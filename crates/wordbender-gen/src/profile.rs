//! The wordlist profile capability interface

/// One wordlist kind's behavior bundle
///
/// A profile supplies everything the pipeline needs to know about a kind: how
/// to prompt for it, how to validate its words, and where its output goes by
/// default. Registering a new profile is the only step required to add a kind.
pub trait WordlistProfile: Send + Sync {
    /// Kind name, as used on the command line and in requests
    fn name(&self) -> &str;

    /// Default output filename for this kind
    fn default_filename(&self) -> &str;

    /// Whether a candidate word is acceptable for this kind
    fn is_valid(&self, word: &str) -> bool;

    /// Build the generation prompt for a seed set and target length
    fn prompt(&self, seeds: &[String], target_length: usize) -> String;

    /// Guidance on what seed words work well for this kind
    fn seed_hints(&self) -> &str {
        ""
    }

    /// How to feed the generated wordlist into downstream tools
    fn usage_notes(&self) -> &str {
        ""
    }
}
