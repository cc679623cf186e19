//! Keccak-f[1600] and the SHA-3 sponge.
//!
//! The permutation is five step mappings (theta, rho, pi, chi, iota) run for
//! 24 rounds. The sponge XORs each rate-sized block of the padded message
//! into the state, permutes, and reads the digest out of the first lanes.
//!
//! Round constants and rotation offsets are derived from their FIPS 202
//! definitions by `build.rs` and included below as constants.

mod permute;
mod sponge;

pub use permute::{chi, iota, permute, permute_with_trace, pi, rho, round, theta};
pub use sponge::{digest, hash, hash_bits, Sponge};

// Include generated tables
include!(concat!(env!("OUT_DIR"), "/params_generated.rs"));
