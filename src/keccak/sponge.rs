//! SHA-3 sponge construction.
//!
//! Implements the fixed-output sponge over Keccak-f[1600]: the padded
//! message is absorbed one rate-sized block at a time and the digest is read
//! from the state in a single squeeze (every SHA-3 rate exceeds its output).

use super::{permute, permute_with_trace};
use crate::codec::{self, Bitstring};
use crate::params::OutputBits;
use crate::state::State;

/// Sponge state for one hash computation.
#[derive(Debug, Clone)]
pub struct Sponge {
    /// Internal 1600-bit state
    state: State,
    /// Output size, which fixes rate and capacity
    outbits: OutputBits,
    /// Number of blocks absorbed so far
    blocks: usize,
}

impl Sponge {
    /// Create a sponge with a zeroed state.
    pub fn new(outbits: OutputBits) -> Self {
        Self {
            state: State::zero(),
            outbits,
            blocks: 0,
        }
    }

    /// Rate in bits.
    pub fn rate(&self) -> usize {
        self.outbits.rate()
    }

    /// Output size this sponge was built for.
    pub fn outbits(&self) -> OutputBits {
        self.outbits
    }

    /// Current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of blocks absorbed so far.
    pub fn blocks_absorbed(&self) -> usize {
        self.blocks
    }

    /// XOR one packed rate block into the state and permute.
    ///
    /// Blocks longer than the rate are cut to the rate.
    pub fn absorb_block(&mut self, block: &[u8]) {
        let block = &block[..block.len().min(self.rate() / 8)];
        self.state = permute(&(self.state ^ State::from_block_bytes(block)));
        self.blocks += 1;
    }

    /// Absorb a padded bitstring, one rate block at a time.
    ///
    /// `padded.len()` must be a multiple of the rate.
    pub fn absorb_padded(&mut self, padded: &Bitstring) {
        debug_assert_eq!(padded.len() % self.rate(), 0);
        for block in padded.blocks(self.rate()) {
            self.absorb_block(block);
        }
    }

    /// Like [`Sponge::absorb_padded`], reporting the state after every
    /// round as `(block, round, state)`.
    pub fn absorb_padded_with_trace<F>(&mut self, padded: &Bitstring, mut on_round: F)
    where
        F: FnMut(usize, usize, &State),
    {
        let rate_bytes = self.rate() / 8;
        for block in padded.blocks(self.rate()) {
            let block = &block[..block.len().min(rate_bytes)];
            let (state, traces) = permute_with_trace(&(self.state ^ State::from_block_bytes(block)));
            for (round, st) in traces.iter().enumerate() {
                on_round(self.blocks, round, st);
            }
            self.state = state;
            self.blocks += 1;
        }
    }

    /// Read the digest as lowercase hex.
    pub fn squeeze_hex(&self) -> String {
        self.state.to_hex(self.outbits.bits())
    }

    /// Read the digest as bytes.
    pub fn squeeze_bytes(&self) -> Vec<u8> {
        self.state.to_bytes(self.outbits.bits())
    }
}

/// Pad an encoded message to whole blocks and absorb it into a fresh sponge.
fn absorb_encoded(encoded: &Bitstring, outbits: OutputBits) -> Sponge {
    let mut sponge = Sponge::new(outbits);
    sponge.absorb_padded(&codec::padded(encoded, outbits.rate()));
    sponge
}

/// SHA-3 digest of a byte message as lowercase hex (`outbits / 4` chars).
pub fn hash(message: &[u8], outbits: OutputBits) -> String {
    absorb_encoded(&codec::encode(message), outbits).squeeze_hex()
}

/// SHA-3 digest of a message of arbitrary bit length as lowercase hex.
pub fn hash_bits(message: &Bitstring, outbits: OutputBits) -> String {
    absorb_encoded(&codec::encode_bits(message), outbits).squeeze_hex()
}

/// SHA-3 digest of a byte message as raw bytes.
pub fn digest(message: &[u8], outbits: OutputBits) -> Vec<u8> {
    absorb_encoded(&codec::encode(message), outbits).squeeze_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_empty_256() {
        assert_eq!(
            hash(b"", OutputBits::Sha3_256),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_hash_deterministic() {
        let a = hash(b"determinism", OutputBits::Sha3_384);
        let b = hash(b"determinism", OutputBits::Sha3_384);
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_different_inputs() {
        assert_ne!(
            hash(b"a", OutputBits::Sha3_256),
            hash(b"b", OutputBits::Sha3_256)
        );
    }

    #[test]
    fn test_digest_matches_hex() {
        for outbits in OutputBits::ALL {
            let bytes = digest(b"abc", outbits);
            assert_eq!(bytes.len(), outbits.bytes());
            assert_eq!(hex::encode(&bytes), hash(b"abc", outbits));
        }
    }

    #[test]
    fn test_block_counts() {
        let outbits = OutputBits::Sha3_256;
        let rate_bytes = outbits.rate() / 8;
        for (len, blocks) in [(0, 1), (rate_bytes - 1, 1), (rate_bytes, 2), (2 * rate_bytes, 3)] {
            let sponge = absorb_encoded(&codec::encode(&vec![0u8; len]), outbits);
            assert_eq!(sponge.blocks_absorbed(), blocks, "len {}", len);
        }
    }

    #[test]
    fn test_trace_matches_plain_absorb() {
        let outbits = OutputBits::Sha3_512;
        let padded = codec::padded(&codec::encode(&[7u8; 100]), outbits.rate());

        let mut plain = Sponge::new(outbits);
        plain.absorb_padded(&padded);

        let mut traced = Sponge::new(outbits);
        let mut calls = Vec::new();
        traced.absorb_padded_with_trace(&padded, |block, round, _| calls.push((block, round)));

        assert_eq!(plain.state(), traced.state());
        assert_eq!(calls.len(), 2 * 24);
        assert_eq!(calls.first(), Some(&(0, 0)));
        assert_eq!(calls.last(), Some(&(1, 23)));
    }

    #[test]
    fn test_hash_bits_matches_hash_for_whole_bytes() {
        let message = b"byte aligned";
        assert_eq!(
            hash_bits(&Bitstring::from_bytes(message), OutputBits::Sha3_224),
            hash(message, OutputBits::Sha3_224)
        );
    }
}
