//! SHA-3 Oracle - a first-principles Keccak sponge.
//!
//! Computes SHA3-224/256/384/512 digests (FIPS 202) without an external hash
//! library: the Keccak-f[1600] permutation, the `pad10*1` rule and the sponge
//! are all implemented here.
//!
//! # Architecture
//!
//! - [`codec`] - bit ordering, domain suffix and padding
//! - [`state`] - the 5x5x64-bit state lattice and digest readout
//! - [`keccak`] - step mappings, the 24-round permutation and the sponge
//! - [`params`] - output sizes and their rate/capacity
//! - [`conformance`] - known-answer corpus runner
//! - [`error`] - error codes
//!
//! # Example
//!
//! ```
//! use sha3_oracle::{hash, OutputBits};
//!
//! let digest = hash(b"abc", OutputBits::Sha3_256);
//! assert_eq!(
//!     digest,
//!     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
//! );
//! ```

// Library code must not unwrap/expect/panic; tests are checked separately.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod codec;
pub mod conformance;
pub mod error;
pub mod keccak;
pub mod params;
pub mod state;

// Re-export commonly used types
pub use codec::Bitstring;
pub use conformance::{CorpusResults, CorpusRunner};
pub use error::{ErrorCode, Sha3Result};
pub use keccak::{digest, hash, hash_bits, permute, Sponge};
pub use params::OutputBits;
pub use state::State;
