//! SHA-3 Oracle CLI.
//!
//! Hashes a literal message, a whole file or stdin and prints the hex digest.

use clap::{Parser, Subcommand};
use sha3_oracle::conformance::{CorpusRunner, TestResult};
use sha3_oracle::error::{ErrorCode, Sha3Result};
use sha3_oracle::{codec, OutputBits, Sponge};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sha3-oracle")]
#[command(about = "SHA-3 digests from a first-principles Keccak sponge", long_about = None)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// String to be hashed
    #[arg(short = 'm', long, conflicts_with = "input_file")]
    message: Option<String>,

    /// File to be hashed (read whole)
    #[arg(short = 'i', long)]
    input_file: Option<PathBuf>,

    /// Digest size in bits (224, 256, 384, 512)
    #[arg(short = 'o', long, default_value = "256")]
    output_bits: OutputBits,

    /// Print lane (0, 0) after every permutation round to stderr
    #[arg(long)]
    trace: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a known-answer corpus (JSON) and report the results
    Check {
        /// Path to the corpus file
        corpus: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Check { corpus }) => run_check(corpus),
        None => run_hash(&cli),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn read_input(cli: &Cli) -> Sha3Result<Vec<u8>> {
    if let Some(message) = &cli.message {
        return Ok(message.as_bytes().to_vec());
    }
    if let Some(path) = &cli.input_file {
        return std::fs::read(path).map_err(|e| {
            ErrorCode::E101_InputUnreadable(format!("{}: {}", path.display(), e))
        });
    }
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .map_err(|e| ErrorCode::E101_InputUnreadable(format!("stdin: {}", e)))?;
    Ok(buf)
}

fn run_hash(cli: &Cli) -> Sha3Result<ExitCode> {
    let input = read_input(cli)?;
    let outbits = cli.output_bits;

    let padded = codec::padded(&codec::encode(&input), outbits.rate());
    let mut sponge = Sponge::new(outbits);
    if cli.trace {
        eprintln!(
            "SHA3-{}: rate {} bits, capacity {} bits, {} block(s)",
            outbits,
            outbits.rate(),
            outbits.capacity(),
            padded.len() / outbits.rate()
        );
        sponge.absorb_padded_with_trace(&padded, |block, round, state| {
            eprintln!("block {} round {:2}: A[0,0] = {:016x}", block, round, state.lane(0, 0));
        });
    } else {
        sponge.absorb_padded(&padded);
    }

    println!("{}", sponge.squeeze_hex());
    Ok(ExitCode::SUCCESS)
}

fn run_check(path: &Path) -> Sha3Result<ExitCode> {
    let runner = CorpusRunner::load(path)
        .map_err(|e| ErrorCode::E101_InputUnreadable(format!("{}: {}", path.display(), e)))?;

    let results = runner.run_all();

    for (id, result) in &results.details {
        match result {
            TestResult::Fail { expected, actual } => {
                println!("FAIL {} - expected: {}, actual: {}", id, expected, actual)
            }
            TestResult::Error { message } => println!("ERROR {} - {}", id, message),
            TestResult::Skip { reason } => println!("SKIP {} - {}", id, reason),
            TestResult::Pass => {}
        }
    }
    println!("{}", results.summary());

    if results.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
