//! The 5x5x64-bit Keccak state lattice.
//!
//! Lanes are stored as `u64` words indexed `[x][y]`. Bit `z` of lane (x, y)
//! is bit `64 * (5y + x) + z` of the flat 1600-bit state, and within a word
//! it is bit `z` counted from the least significant end.

mod types;

pub use types::{hex_constant_to_lane, Lane, State, LANES};
