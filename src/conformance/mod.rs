//! Known-answer conformance testing.
//!
//! Loads a JSON corpus of published SHA-3 test vectors and table spot-checks
//! and runs it against this implementation. The same runner backs the
//! `check` CLI subcommand and the corpus integration tests.

pub mod corpus;

pub use corpus::{Corpus, CorpusManifest, CorpusResults, CorpusRunner, TestResult, TestVector};

use thiserror::Error;

/// Result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;

/// Errors that can occur while loading a corpus.
#[derive(Debug, Error)]
pub enum ConformanceError {
    /// Corpus file could not be read
    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),
    /// Corpus file is not valid corpus JSON
    #[error("failed to parse corpus JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
