//! Corpus-based conformance tests.
//!
//! Runs every vector in `vectors/sha3_kat.json`: published SHA-3 digests,
//! padding boundary messages, and the Keccak-f[1600] constant tables.

use sha3_oracle::conformance::{CorpusRunner, TestResult};
use std::path::Path;

/// Path to the corpus file relative to the crate root.
const CORPUS_PATH: &str = "vectors/sha3_kat.json";

fn load_corpus() -> CorpusRunner {
    let corpus_path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CORPUS_PATH);
    CorpusRunner::load(&corpus_path).expect("Failed to load corpus")
}

/// Load and run the full corpus.
#[test]
fn test_full_corpus() {
    let runner = load_corpus();

    println!("Loaded corpus with {} vectors", runner.vector_count());
    println!("Manifest: {:?}", runner.manifest());

    let results = runner.run_all();

    println!("\n=== Corpus Conformance Results ===");
    println!("{}", results.summary());

    if !results.failures().is_empty() {
        println!("\nFailures:");
        for (id, result) in results.failures() {
            if let TestResult::Fail { expected, actual } = result {
                println!("  {} - expected: {}, actual: {}", id, expected, actual);
            }
        }
    }

    if !results.error_details().is_empty() {
        println!("\nErrors:");
        for (id, result) in results.error_details() {
            if let TestResult::Error { message } = result {
                println!("  {} - {}", id, message);
            }
        }
    }

    assert!(
        results.all_passed(),
        "Corpus conformance failed: {}",
        results.summary()
    );
    assert_eq!(results.skipped, 0, "Corpus has unknown operations");
}

/// Test that we can load the corpus manifest.
#[test]
fn test_corpus_manifest() {
    let runner = load_corpus();
    let manifest = runner.manifest();
    assert_eq!(manifest.format_version, "1");
    assert!(!manifest.source.is_empty());
}

/// Every table entry is covered by the corpus.
#[test]
fn test_corpus_covers_tables() {
    let results = load_corpus().run_all();
    let count = |prefix: &str| {
        results
            .details
            .iter()
            .filter(|(id, _)| id.starts_with(prefix))
            .count()
    };
    assert_eq!(count("round_constant_"), 24);
    assert_eq!(count("rotation_offset_"), 25);
    for size in ["224", "256", "384", "512"] {
        assert!(count(&format!("sha3_{}_", size)) >= 7, "SHA3-{} vectors", size);
    }
}
