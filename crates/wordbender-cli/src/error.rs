//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generation pipeline error
    #[error(transparent)]
    Gen(#[from] wordbender_gen::GenError),

    /// Provider client error
    #[error(transparent)]
    Llm(#[from] wordbender_llm::LlmError),

    /// Batch orchestration error
    #[error(transparent)]
    Batch(#[from] wordbender_batch::BatchError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Readline error in interactive mode
    #[error("Input error: {0}")]
    Readline(String),
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(e: rustyline::error::ReadlineError) -> Self {
        CliError::Readline(e.to_string())
    }
}
