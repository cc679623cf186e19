//! Sponge parameters for the four SHA-3 output sizes.

use crate::error::{ErrorCode, Sha3Result};
use std::fmt;
use std::str::FromStr;

/// Width of the Keccak-f permutation in bits (b = 25w).
pub const STATE_BITS: usize = 1600;

/// Lane width in bits (w).
pub const LANE_BITS: usize = 64;

/// Requested digest length.
///
/// Rate and capacity are derived from the digest length: the capacity is
/// twice the output size and the rate is whatever is left of the 1600-bit
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum OutputBits {
    /// SHA3-224
    Sha3_224,
    /// SHA3-256
    #[default]
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
}

impl OutputBits {
    /// All supported sizes, smallest first.
    pub const ALL: [OutputBits; 4] = [
        OutputBits::Sha3_224,
        OutputBits::Sha3_256,
        OutputBits::Sha3_384,
        OutputBits::Sha3_512,
    ];

    /// Digest length in bits.
    pub const fn bits(self) -> usize {
        match self {
            OutputBits::Sha3_224 => 224,
            OutputBits::Sha3_256 => 256,
            OutputBits::Sha3_384 => 384,
            OutputBits::Sha3_512 => 512,
        }
    }

    /// Digest length in bytes.
    pub const fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Capacity in bits (2 * output).
    pub const fn capacity(self) -> usize {
        2 * self.bits()
    }

    /// Rate in bits (1600 - capacity).
    pub const fn rate(self) -> usize {
        STATE_BITS - self.capacity()
    }

    /// Number of hex characters in the digest.
    pub const fn hex_len(self) -> usize {
        self.bits() / 4
    }
}

impl TryFrom<u64> for OutputBits {
    type Error = ErrorCode;

    fn try_from(bits: u64) -> Sha3Result<Self> {
        match bits {
            224 => Ok(OutputBits::Sha3_224),
            256 => Ok(OutputBits::Sha3_256),
            384 => Ok(OutputBits::Sha3_384),
            512 => Ok(OutputBits::Sha3_512),
            other => Err(ErrorCode::E100_UnsupportedOutputBits(other)),
        }
    }
}

impl FromStr for OutputBits {
    type Err = ErrorCode;

    fn from_str(s: &str) -> Sha3Result<Self> {
        let bits: u64 = s
            .parse()
            .map_err(|_| ErrorCode::E100_UnsupportedOutputBits(0))?;
        // Exact spellings only: "+256" and "0256" are not sizes.
        if bits.to_string() != s {
            return Err(ErrorCode::E100_UnsupportedOutputBits(bits));
        }
        OutputBits::try_from(bits)
    }
}

impl fmt::Display for OutputBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
