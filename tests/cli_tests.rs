//! CLI integration tests.
//!
//! Tests the sha3-oracle binary by invoking it as a subprocess.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

const ABC_256: &str = "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532";
const EMPTY_256: &str = "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a";

fn oracle_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sha3-oracle"))
}

fn run_with_stdin(args: &[&str], input: &[u8]) -> (i32, String, String) {
    let oracle = oracle_path();
    let mut child = Command::new(&oracle)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn oracle at {:?}: {}", oracle, e));

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

fn run(args: &[&str]) -> (i32, String, String) {
    run_with_stdin(args, b"")
}

fn temp_file_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("sha3_oracle_test_{}_{}", std::process::id(), name))
}

// ============================================================================
// Hashing
// ============================================================================

#[test]
fn cli_message_default_256() {
    let (code, stdout, _stderr) = run(&["-m", "abc"]);
    assert_eq!(code, 0, "Expected success exit code");
    assert_eq!(stdout, format!("{}\n", ABC_256));
}

#[test]
fn cli_message_each_size() {
    let expected = [
        ("224", "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf"),
        ("256", ABC_256),
        (
            "384",
            "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25",
        ),
        (
            "512",
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
        ),
    ];
    for (bits, digest) in expected {
        let (code, stdout, _stderr) = run(&["--message", "abc", "--output-bits", bits]);
        assert_eq!(code, 0, "SHA3-{} exit code", bits);
        assert_eq!(stdout.trim_end(), digest, "SHA3-{} digest", bits);
    }
}

#[test]
fn cli_input_file() {
    let path = temp_file_path("hello.txt");
    fs::write(&path, b"hello").unwrap();

    let (code, stdout, _stderr) = run(&["-i", path.to_str().unwrap(), "-o", "256"]);
    fs::remove_file(&path).ok();

    assert_eq!(code, 0, "Expected success exit code");
    assert_eq!(
        stdout.trim_end(),
        "3338be694f50c5f338814986cdf0686453a888b84f424d792af4b9202398f392"
    );
}

#[test]
fn cli_stdin() {
    let (code, stdout, _stderr) = run_with_stdin(&[], b"abc");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), ABC_256);
}

#[test]
fn cli_empty_stdin() {
    let (code, stdout, _stderr) = run(&[]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), EMPTY_256);
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn cli_rejects_unsupported_size() {
    let (code, stdout, stderr) = run(&["-m", "abc", "-o", "128"]);
    assert_eq!(code, 2, "Expected usage error exit code");
    assert!(stdout.is_empty(), "No digest on usage error: {}", stdout);
    assert!(stderr.contains("E100"), "Expected E100 in stderr: {}", stderr);
}

#[test]
fn cli_message_and_file_conflict() {
    let (code, stdout, _stderr) = run(&["-m", "abc", "-i", "whatever.bin"]);
    assert_eq!(code, 2, "Expected usage error exit code");
    assert!(stdout.is_empty());
}

#[test]
fn cli_missing_file() {
    let path = temp_file_path("does_not_exist.bin");
    let (code, stdout, stderr) = run(&["-i", path.to_str().unwrap()]);
    assert_eq!(code, 1, "Expected failure exit code");
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("E101_InputUnreadable"),
        "Expected E101 in stderr: {}",
        stderr
    );
}

// ============================================================================
// Trace
// ============================================================================

#[test]
fn cli_trace_reports_every_round() {
    let (code, stdout, stderr) = run(&["-m", "abc", "--trace"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), ABC_256);
    assert!(stderr.contains("rate 1088 bits"), "stderr: {}", stderr);
    let rounds = stderr.lines().filter(|l| l.starts_with("block 0 round")).count();
    assert_eq!(rounds, 24);
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn cli_check_shipped_corpus() {
    let corpus = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("vectors/sha3_kat.json");
    let (code, stdout, _stderr) = run(&["check", corpus.to_str().unwrap()]);
    assert_eq!(code, 0, "Expected success exit code: {}", stdout);
    assert!(stdout.contains("0 failed"), "stdout: {}", stdout);
}

#[test]
fn cli_check_reports_failure() {
    let path = temp_file_path("bad_corpus.json");
    fs::write(
        &path,
        r#"{
            "manifest": { "format_version": "1" },
            "vectors": [
                { "id": "wrong_digest", "op": "sha3_hash",
                  "input": { "message_utf8": "abc", "outbits": 256 },
                  "expected": { "ok": { "hex": "00" } } }
            ]
        }"#,
    )
    .unwrap();

    let (code, stdout, _stderr) = run(&["check", path.to_str().unwrap()]);
    fs::remove_file(&path).ok();

    assert_eq!(code, 1, "Expected failure exit code");
    assert!(stdout.contains("FAIL wrong_digest"), "stdout: {}", stdout);
    assert!(stdout.contains("1 failed"), "stdout: {}", stdout);
}

#[test]
fn cli_check_unreadable_corpus() {
    let path = temp_file_path("missing_corpus.json");
    let (code, _stdout, stderr) = run(&["check", path.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error: "), "stderr: {}", stderr);
}
