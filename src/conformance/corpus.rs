//! Corpus-based conformance testing.
//!
//! A corpus is a JSON document with a manifest and a list of vectors:
//!
//! ```json
//! { "manifest": { "format_version": "1", "description": "...", "source": "..." },
//!   "vectors": [
//!     { "id": "sha3_256_abc", "op": "sha3_hash",
//!       "input": { "message_utf8": "abc", "outbits": 256 },
//!       "expected": { "ok": { "hex": "3a985da7..." } } } ] }
//! ```
//!
//! Supported operations:
//! - `sha3_hash`: message from `message_utf8`, `message_hex` (optionally
//!   repeated `repeat` times) or `bits`; `outbits` is the digest size.
//!   Expected is `{"ok": {"hex": ...}}` or `{"err": {"code": ...}}`.
//! - `round_constant`: `round` -> `{"ok": {"hex": <16 hex chars>}}`.
//! - `rotation_offset`: `x`, `y` -> `{"ok": {"value": <offset>}}`.

use super::ConformanceResult;
use crate::codec::Bitstring;
use crate::error::{ErrorCode, Sha3Result};
use crate::keccak::{hash, hash_bits, ROTATION_OFFSETS, ROUNDS, ROUND_CONSTANTS};
use crate::params::OutputBits;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Corpus manifest with metadata.
#[derive(Debug, Deserialize)]
pub struct CorpusManifest {
    /// Format version of the corpus file.
    pub format_version: String,
    /// What the corpus covers.
    #[serde(default)]
    pub description: String,
    /// Where the expected values come from.
    #[serde(default)]
    pub source: String,
}

/// A corpus containing test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus metadata.
    pub manifest: CorpusManifest,
    /// List of test vectors.
    pub vectors: Vec<TestVector>,
}

/// A single test vector.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the test.
    pub id: String,
    /// Operation to test (e.g., "sha3_hash", "round_constant").
    pub op: String,
    /// Input parameters for the operation.
    pub input: serde_json::Value,
    /// Expected result (success or error).
    pub expected: serde_json::Value,
}

/// Result of running a single test vector.
#[derive(Debug, PartialEq, Eq)]
pub enum TestResult {
    /// Test passed.
    Pass,
    /// Test failed with mismatch.
    Fail {
        /// Expected result from the corpus.
        expected: String,
        /// Actual result from this implementation.
        actual: String,
    },
    /// Test was skipped (operation not implemented).
    Skip {
        /// Reason for skipping.
        reason: String,
    },
    /// Test errored during execution.
    Error {
        /// Error message.
        message: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns true if this is a failing result.
    pub fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }
}

/// Results from running the corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of tests that passed.
    pub passed: usize,
    /// Number of tests that failed.
    pub failed: usize,
    /// Number of tests that were skipped.
    pub skipped: usize,
    /// Number of tests that errored.
    pub errors: usize,
    /// Detailed results for each test.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Create a new empty results container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a test result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skip { .. } => self.skipped += 1,
            TestResult::Error { .. } => self.errors += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Get total number of tests run.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped + self.errors
    }

    /// Returns true if all tests passed (no failures or errors).
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Get a summary string of the results.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped, {} errors (total: {})",
            self.passed,
            self.failed,
            self.skipped,
            self.errors,
            self.total()
        )
    }

    /// Get failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Fail { .. }))
            .collect()
    }

    /// Get errors only.
    pub fn error_details(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Error { .. }))
            .collect()
    }
}

/// Corpus runner that executes test vectors.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load corpus from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> ConformanceResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Parse a corpus from JSON text.
    pub fn from_json(content: &str) -> ConformanceResult<Self> {
        let corpus: Corpus = serde_json::from_str(content)?;
        Ok(Self { corpus })
    }

    /// Get the corpus manifest.
    pub fn manifest(&self) -> &CorpusManifest {
        &self.corpus.manifest
    }

    /// Get the number of test vectors.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Run all test vectors and return results.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::new();

        for vector in &self.corpus.vectors {
            let result = self.run_vector(vector);
            results.record(&vector.id, result);
        }

        results
    }

    /// Run a single test vector.
    fn run_vector(&self, vector: &TestVector) -> TestResult {
        match vector.op.as_str() {
            "sha3_hash" => self.run_sha3_hash(vector),
            "round_constant" => self.run_round_constant(vector),
            "rotation_offset" => self.run_rotation_offset(vector),
            _ => TestResult::Skip {
                reason: format!("Unknown operation: {}", vector.op),
            },
        }
    }

    /// Run sha3_hash test.
    fn run_sha3_hash(&self, vector: &TestVector) -> TestResult {
        let outbits = match vector.input.get("outbits").and_then(|v| v.as_u64()) {
            Some(n) => n,
            None => {
                return TestResult::Error {
                    message: "Missing 'outbits' in input".to_string(),
                }
            }
        };

        let result = match message_from_input(&vector.input) {
            Ok(Message::Bytes(bytes)) => OutputBits::try_from(outbits).map(|o| hash(&bytes, o)),
            Ok(Message::Bits(bits)) => OutputBits::try_from(outbits).map(|o| hash_bits(&bits, o)),
            Err(message) => return TestResult::Error { message },
        };

        check_hex_or_error(&vector.expected, result)
    }

    /// Run round_constant test.
    fn run_round_constant(&self, vector: &TestVector) -> TestResult {
        let round = match vector.input.get("round").and_then(|v| v.as_u64()) {
            Some(r) if (r as usize) < ROUNDS => r as usize,
            Some(r) => {
                return TestResult::Error {
                    message: format!("Round {} out of range", r),
                }
            }
            None => {
                return TestResult::Error {
                    message: "Missing 'round' in input".to_string(),
                }
            }
        };

        check_hex_or_error(
            &vector.expected,
            Ok(format!("{:016x}", ROUND_CONSTANTS[round])),
        )
    }

    /// Run rotation_offset test.
    fn run_rotation_offset(&self, vector: &TestVector) -> TestResult {
        let coord = |key: &str| {
            vector
                .input
                .get(key)
                .and_then(|v| v.as_u64())
                .filter(|&c| c < 5)
                .map(|c| c as usize)
        };
        let (x, y) = match (coord("x"), coord("y")) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                return TestResult::Error {
                    message: "Missing or out-of-range 'x'/'y' in input".to_string(),
                }
            }
        };

        let expected = match vector
            .expected
            .get("ok")
            .and_then(|ok| ok.get("value"))
            .and_then(|v| v.as_u64())
        {
            Some(v) => v,
            None => {
                return TestResult::Error {
                    message: "Invalid expected format".to_string(),
                }
            }
        };

        let actual = u64::from(ROTATION_OFFSETS[x][y]);
        if actual == expected {
            TestResult::Pass
        } else {
            TestResult::Fail {
                expected: expected.to_string(),
                actual: actual.to_string(),
            }
        }
    }
}

/// Message decoded from a vector's input.
enum Message {
    Bytes(Vec<u8>),
    Bits(Bitstring),
}

fn message_from_input(input: &serde_json::Value) -> Result<Message, String> {
    if let Some(text) = input.get("message_utf8").and_then(|v| v.as_str()) {
        return Ok(Message::Bytes(text.as_bytes().to_vec()));
    }
    if let Some(hex_str) = input.get("message_hex").and_then(|v| v.as_str()) {
        let unit = parse_hex(hex_str).map_err(|e| format!("Invalid hex: {}", e))?;
        let repeat = input.get("repeat").and_then(|v| v.as_u64()).unwrap_or(1) as usize;
        return Ok(Message::Bytes(unit.repeat(repeat)));
    }
    if let Some(bits) = input.get("bits").and_then(|v| v.as_str()) {
        return Bitstring::from_bit_str(bits)
            .map(Message::Bits)
            .map_err(|e| format!("Invalid bits: {}", e));
    }
    Err("Missing message ('message_utf8', 'message_hex' or 'bits') in input".to_string())
}

fn parse_hex(hex_str: &str) -> Sha3Result<Vec<u8>> {
    hex::decode(hex_str).map_err(|_| ErrorCode::E103_InvalidHex)
}

/// Compare a hex result (or error) against `{"ok": {"hex"}}` / `{"err": {"code"}}`.
fn check_hex_or_error(expected: &serde_json::Value, result: Sha3Result<String>) -> TestResult {
    if let Some(ok) = expected.get("ok") {
        let expected_hex = ok.get("hex").and_then(|v| v.as_str()).unwrap_or("");
        match result {
            Ok(actual) if actual == expected_hex.to_ascii_lowercase() => TestResult::Pass,
            Ok(actual) => TestResult::Fail {
                expected: expected_hex.to_string(),
                actual,
            },
            Err(e) => TestResult::Fail {
                expected: format!("ok: {}", expected_hex),
                actual: format!("err: {}", e),
            },
        }
    } else if let Some(err) = expected.get("err") {
        let expected_code = err.get("code").and_then(|v| v.as_u64()).unwrap_or(0) as u32;
        match result {
            Ok(actual) => TestResult::Fail {
                expected: format!("E{}", expected_code),
                actual: format!("ok: {}", actual),
            },
            Err(e) if e.code() == expected_code => TestResult::Pass,
            Err(e) => TestResult::Fail {
                expected: format!("E{}", expected_code),
                actual: format!("E{}", e.code()),
            },
        }
    } else {
        TestResult::Error {
            message: "Invalid expected format".to_string(),
        }
    }
}
