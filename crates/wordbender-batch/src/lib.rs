//! Wordbender Batch Orchestrator
//!
//! Drives the generation pipeline across many seed sets. Seed sets are
//! processed sequentially so at most one provider call is in flight, and
//! every outcome is recorded against its own seed set: one failure never
//! aborts the rest unless the caller asks for stop-on-first-error.
//!
//! Completed entries are handed to a [`ResultSink`] as soon as they exist, so
//! partial progress survives an interruption between seed sets.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use wordbender_batch::{BatchOptions, MemorySink, Orchestrator};
//! use wordbender_gen::profiles::SubdomainProfile;
//! use wordbender_gen::Generator;
//! use wordbender_llm::MockClient;
//!
//! # tokio_test::block_on(async {
//! let generator = Generator::new(Arc::new(SubdomainProfile));
//! let client = MockClient::new("api\ndev\nstaging\n");
//! let orchestrator = Orchestrator::new(BatchOptions::default());
//!
//! let seed_sets = vec![vec!["acme".to_string()], vec!["corp".to_string()]];
//! let mut sink = MemorySink::new();
//! let report = orchestrator
//!     .run(&generator, &client, seed_sets, 10, None, &mut sink)
//!     .await
//!     .unwrap();
//!
//! assert_eq!(report.succeeded(), 2);
//! # });
//! ```

#![warn(missing_docs)]

use thiserror::Error;
use tracing::{info, warn};
use wordbender_domain::{BatchEntry, BatchReport, GenerationRequest};
use wordbender_gen::Generator;
use wordbender_llm::LlmClient;

/// Default number of seeds grouped into one seed set
pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// Errors that can occur during batch orchestration
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input contained no seed sets at all
    #[error("No seed words provided for batch processing")]
    NoSeeds,

    /// A sink write failed; the batch cannot make durable progress
    #[error("Failed to write batch results: {0}")]
    Sink(#[from] std::io::Error),

    /// Stop-on-first-error was requested and a seed set failed
    #[error("Batch stopped on first error: {0}")]
    Stopped(String),
}

/// Knobs for one batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// How many flat seeds are grouped into one seed set
    pub chunk_size: usize,

    /// Abort on the first failed seed set instead of recording and moving on
    pub stop_on_error: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            stop_on_error: false,
        }
    }
}

/// Receives completed batch entries one at a time
///
/// Implementations must make each entry durable before returning, so an
/// interruption between seed sets loses nothing already written.
pub trait ResultSink {
    /// Persist one completed entry
    fn write(&mut self, entry: &BatchEntry) -> std::io::Result<()>;
}

/// Sink that keeps entries in memory; used by tests and dry runs
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Entries in the order they were written
    pub entries: Vec<BatchEntry>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All words across successful entries, in write order
    pub fn words(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().ok())
            .flat_map(|r| r.words.iter().cloned())
            .collect()
    }
}

impl ResultSink for MemorySink {
    fn write(&mut self, entry: &BatchEntry) -> std::io::Result<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}

/// Group a flat list of seeds into seed sets of `chunk_size`
///
/// Blank seeds are dropped; the final set may be smaller than the chunk size.
pub fn chunk_seeds(seeds: &[String], chunk_size: usize) -> Vec<Vec<String>> {
    let cleaned: Vec<String> = seeds
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    let size = chunk_size.max(1);
    cleaned.chunks(size).map(|c| c.to_vec()).collect()
}

/// Sequentially processes seed sets through a generator
pub struct Orchestrator {
    options: BatchOptions,
}

impl Orchestrator {
    /// Create an orchestrator with the given options
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    /// Process every seed set, recording one entry per set in input order
    ///
    /// Each entry is written to the sink as soon as its seed set completes.
    /// Failures are recorded and skipped unless `stop_on_error` is set.
    pub async fn run(
        &self,
        generator: &Generator,
        client: &dyn LlmClient,
        seed_sets: Vec<Vec<String>>,
        target_length: usize,
        extra_instructions: Option<&str>,
        sink: &mut dyn ResultSink,
    ) -> Result<BatchReport, BatchError> {
        if seed_sets.is_empty() {
            return Err(BatchError::NoSeeds);
        }

        let total = seed_sets.len();
        let kind = generator.profile().name().to_string();
        info!("Processing {} seed sets for kind '{}'", total, kind);

        let mut report = BatchReport::new();

        for (index, seeds) in seed_sets.into_iter().enumerate() {
            let outcome = self
                .process_seed_set(generator, client, &kind, &seeds, target_length, extra_instructions)
                .await;

            match &outcome {
                Ok(result) => {
                    info!(
                        "Seed set {}/{}: {} words",
                        index + 1,
                        total,
                        result.count()
                    );
                }
                Err(message) => {
                    warn!("Seed set {}/{} failed: {}", index + 1, total, message);
                }
            }

            let entry = BatchEntry {
                seeds: seeds.clone(),
                outcome,
            };
            sink.write(&entry)?;

            let failed = entry.outcome.as_ref().err().cloned();
            report.push(entry);

            if let Some(message) = failed {
                if self.options.stop_on_error {
                    return Err(BatchError::Stopped(message));
                }
            }
        }

        info!(
            "Batch complete: {} succeeded, {} failed, {} words total",
            report.succeeded(),
            report.failed(),
            report.total_words()
        );
        Ok(report)
    }

    /// Run one seed set, folding every failure into a recorded message
    async fn process_seed_set(
        &self,
        generator: &Generator,
        client: &dyn LlmClient,
        kind: &str,
        seeds: &[String],
        target_length: usize,
        extra_instructions: Option<&str>,
    ) -> Result<wordbender_domain::GenerationResult, String> {
        let mut request = GenerationRequest::new(kind, seeds.to_vec(), target_length)
            .map_err(|e| e.to_string())?;
        if let Some(extra) = extra_instructions {
            request = request.with_instructions(extra);
        }

        generator
            .generate(client, &request)
            .await
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wordbender_gen::profiles::SubdomainProfile;

    fn generator() -> Generator {
        Generator::new(Arc::new(SubdomainProfile))
    }

    fn seed_sets(names: &[&str]) -> Vec<Vec<String>> {
        names.iter().map(|n| vec![n.to_string()]).collect()
    }

    #[test]
    fn test_chunk_seeds() {
        let seeds: Vec<String> = ["a", "b", "c", "d", "e", "f", "g"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let chunks = chunk_seeds(&seeds, 3);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0], vec!["a", "b", "c"]);
        assert_eq!(chunks[2], vec!["g"]);
    }

    #[test]
    fn test_chunk_seeds_drops_blanks() {
        let seeds: Vec<String> = ["a", "  ", "b", ""].iter().map(|s| s.to_string()).collect();
        let chunks = chunk_seeds(&seeds, 2);
        assert_eq!(chunks, vec![vec!["a".to_string(), "b".to_string()]]);
    }

    #[test]
    fn test_chunk_size_zero_treated_as_one() {
        let seeds: Vec<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let chunks = chunk_seeds(&seeds, 0);
        assert_eq!(chunks.len(), 2);
    }

    #[tokio::test]
    async fn test_all_seed_sets_succeed() {
        let client = wordbender_llm::MockClient::new("api\ndev\nstaging\n");
        let orchestrator = Orchestrator::new(BatchOptions::default());
        let mut sink = MemorySink::new();

        let report = orchestrator
            .run(
                &generator(),
                &client,
                seed_sets(&["acme", "corp", "initech"]),
                10,
                None,
                &mut sink,
            )
            .await
            .unwrap();

        assert_eq!(report.succeeded(), 3);
        assert_eq!(report.failed(), 0);
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn test_failure_isolated_to_its_seed_set() {
        // One seed set always fails non-transiently; the others are untouched
        let client = wordbender_llm::MockClient::new("api\ndev\n");
        client.fail_if_contains("poison", "Invalid API key");
        let orchestrator = Orchestrator::new(BatchOptions::default());
        let mut sink = MemorySink::new();

        let report = orchestrator
            .run(
                &generator(),
                &client,
                seed_sets(&["acme", "poison", "corp"]),
                10,
                None,
                &mut sink,
            )
            .await
            .unwrap();

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);

        // Input order preserved; the failure sits where its seed set was
        assert!(report.entries[0].is_success());
        assert!(!report.entries[1].is_success());
        assert!(report.entries[2].is_success());
        assert_eq!(report.entries[1].seeds, vec!["poison"]);
        assert_eq!(
            report.entries[0].outcome.as_ref().unwrap().words,
            vec!["api", "dev"]
        );
    }

    #[tokio::test]
    async fn test_entries_flushed_per_seed_set() {
        let client = wordbender_llm::MockClient::new("api\n");
        let orchestrator = Orchestrator::new(BatchOptions::default());
        let mut sink = MemorySink::new();

        let report = orchestrator
            .run(
                &generator(),
                &client,
                seed_sets(&["one", "two"]),
                5,
                None,
                &mut sink,
            )
            .await
            .unwrap();

        // Every reported entry reached the sink, in the same order
        assert_eq!(sink.entries.len(), report.entries.len());
        assert_eq!(sink.entries[0].seeds, vec!["one"]);
        assert_eq!(sink.entries[1].seeds, vec!["two"]);
    }

    #[tokio::test]
    async fn test_stop_on_error() {
        let client = wordbender_llm::MockClient::new("api\n");
        client.fail_if_contains("poison", "Invalid API key");
        let orchestrator = Orchestrator::new(BatchOptions {
            chunk_size: DEFAULT_CHUNK_SIZE,
            stop_on_error: true,
        });
        let mut sink = MemorySink::new();

        let result = orchestrator
            .run(
                &generator(),
                &client,
                seed_sets(&["acme", "poison", "corp"]),
                5,
                None,
                &mut sink,
            )
            .await;

        assert!(matches!(result, Err(BatchError::Stopped(_))));
        // The failing entry was still flushed; nothing after it ran
        assert_eq!(sink.entries.len(), 2);
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_empty_input_rejected() {
        let client = wordbender_llm::MockClient::new("api\n");
        let orchestrator = Orchestrator::new(BatchOptions::default());
        let mut sink = MemorySink::new();

        let result = orchestrator
            .run(&generator(), &client, Vec::new(), 5, None, &mut sink)
            .await;
        assert!(matches!(result, Err(BatchError::NoSeeds)));
    }

    #[tokio::test]
    async fn test_instructions_forwarded() {
        let client = wordbender_llm::MockClient::new("api\n");
        let orchestrator = Orchestrator::new(BatchOptions::default());
        let mut sink = MemorySink::new();

        orchestrator
            .run(
                &generator(),
                &client,
                seed_sets(&["acme"]),
                5,
                Some("internal hosts only"),
                &mut sink,
            )
            .await
            .unwrap();

        assert!(client.prompts()[0].contains("internal hosts only"));
    }
}
