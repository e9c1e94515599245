//! Generation request module

/// Errors raised while constructing a generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The seed set was empty (or contained only blank entries)
    EmptySeeds,

    /// The requested wordlist length was zero
    ZeroLength,
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestError::EmptySeeds => write!(f, "No valid seed words provided"),
            RequestError::ZeroLength => write!(f, "Wordlist length must be positive"),
        }
    }
}

impl std::error::Error for RequestError {}

/// One generation request: a seed set, a kind, and a target length
///
/// Seeds are opaque context for the model - they are trimmed and required to
/// be non-empty, nothing more. The kind is carried by name so the request
/// type works for registry-added kinds as well as the built-ins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    kind: String,
    seeds: Vec<String>,
    target_length: usize,
    extra_instructions: Option<String>,
}

impl GenerationRequest {
    /// Create a new request
    ///
    /// Blank seeds are dropped after trimming; an all-blank or empty seed set
    /// is an error, as is a zero target length.
    pub fn new(
        kind: impl Into<String>,
        seeds: Vec<String>,
        target_length: usize,
    ) -> Result<Self, RequestError> {
        if target_length == 0 {
            return Err(RequestError::ZeroLength);
        }
        let seeds: Vec<String> = seeds
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if seeds.is_empty() {
            return Err(RequestError::EmptySeeds);
        }
        Ok(Self {
            kind: kind.into(),
            seeds,
            target_length,
            extra_instructions: None,
        })
    }

    /// Attach additional free-form instructions for the model
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        let text = instructions.into();
        self.extra_instructions = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }

    /// The wordlist kind name
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The seed words, trimmed, in input order
    pub fn seeds(&self) -> &[String] {
        &self.seeds
    }

    /// The requested number of output words
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Additional instructions, if any
    pub fn extra_instructions(&self) -> Option<&str> {
        self.extra_instructions.as_deref()
    }
}
