//! Batch report module - per-seed-set outcomes for a batch run

use crate::result::GenerationResult;

/// Outcome for one seed set within a batch
///
/// A failure is recorded as the error's display text; it never aborts the
/// surrounding batch.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// The seed set this entry was generated from
    pub seeds: Vec<String>,

    /// The generation result, or the recorded failure message
    pub outcome: Result<GenerationResult, String>,
}

impl BatchEntry {
    /// Whether this entry succeeded
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Accumulated outcomes of a batch run, in input order
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// One entry per processed seed set
    pub entries: Vec<BatchEntry>,
}

impl BatchReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for the next seed set
    pub fn push(&mut self, entry: BatchEntry) {
        self.entries.push(entry);
    }

    /// Number of seed sets that produced a result
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|e| e.is_success()).count()
    }

    /// Number of seed sets that failed
    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    /// Total words produced across all successful entries
    pub fn total_words(&self) -> usize {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().ok())
            .map(|r| r.count())
            .sum()
    }
}
