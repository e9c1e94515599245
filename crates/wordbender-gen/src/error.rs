//! Error types for the generation pipeline

use thiserror::Error;
use wordbender_domain::RequestError;
use wordbender_llm::LlmError;

/// Errors that can occur while generating a wordlist
#[derive(Error, Debug)]
pub enum GenError {
    /// No profile registered under the requested kind name
    #[error("Unknown wordlist kind '{requested}', known kinds: {}", .known.join(", "))]
    UnknownKind {
        /// The kind name that failed to resolve
        requested: String,
        /// All registered kind names
        known: Vec<String>,
    },

    /// Provider client failure (configuration, rejection, or exhausted retries)
    #[error(transparent)]
    Provider(#[from] LlmError),

    /// The request itself was malformed
    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    /// The completion yielded no valid words at all
    #[error("No valid words produced from the model response")]
    EmptyYield,

    /// Pipeline configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
