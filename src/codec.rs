//! Bit-level message encoding for the sponge.
//!
//! Keccak numbers the bits of a byte from the least significant end, so the
//! byte `0x01` is the bit sequence `10000000`. A [`Bitstring`] keeps bits
//! packed in exactly that order: bit `i` is bit `i % 8` of byte `i / 8`.
//! Packing a byte message therefore needs no reordering; the reversal only
//! shows when bits are rendered as text.

use crate::error::{ErrorCode, Sha3Result};
use std::fmt;

/// SHA-3 domain suffix: the `01` delimiter followed by the opening `1` of
/// `pad10*1`, in sponge order.
pub const DOMAIN_SUFFIX: [bool; 3] = [false, true, true];

/// An immutable-once-built sequence of bits in sponge order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bitstring {
    bytes: Vec<u8>,
    len: usize,
}

impl Bitstring {
    /// Create an empty bitstring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bitstring with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Wrap a byte message; each byte contributes 8 bits, LSB first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Parse a `0`/`1` string written in sponge order.
    pub fn from_bit_str(s: &str) -> Sha3Result<Self> {
        let mut bits = Self::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(ErrorCode::E102_InvalidBitString(i as u64)),
            }
        }
        Ok(bits)
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if there are no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit `i`, or `None` past the end.
    pub fn get(&self, i: usize) -> Option<bool> {
        if i >= self.len {
            return None;
        }
        Some((self.bytes[i / 8] >> (i % 8)) & 1 == 1)
    }

    /// Append one bit.
    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 1 << offset;
            }
        }
        self.len += 1;
    }

    /// Append every bit of `other`.
    pub fn extend(&mut self, other: &Bitstring) {
        if self.len % 8 == 0 {
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Concatenation `self ++ other`.
    pub fn concat(&self, other: &Bitstring) -> Bitstring {
        let mut out = Self::with_capacity(self.len + other.len);
        out.extend(self);
        out.extend(other);
        out
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.bytes[i / 8] >> (i % 8)) & 1 == 1)
    }

    /// Packed view. Trailing bits of a partial last byte are zero.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Split into consecutive `block_bits`-bit blocks.
    ///
    /// `block_bits` must be a non-zero multiple of 8; the final block is
    /// shorter when the length is not a multiple of it.
    pub fn blocks(&self, block_bits: usize) -> impl Iterator<Item = &[u8]> + '_ {
        debug_assert!(block_bits > 0 && block_bits % 8 == 0);
        self.bytes.chunks(block_bits / 8)
    }
}

impl FromIterator<bool> for Bitstring {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = Bitstring::new();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

impl fmt::Display for Bitstring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Encode a byte message and append the SHA-3 domain suffix.
pub fn encode(input: &[u8]) -> Bitstring {
    let mut bits = Bitstring::with_capacity(input.len() * 8 + DOMAIN_SUFFIX.len());
    bits.extend(&Bitstring::from_bytes(input));
    for bit in DOMAIN_SUFFIX {
        bits.push(bit);
    }
    bits
}

/// Append the SHA-3 domain suffix to a message of arbitrary bit length.
pub fn encode_bits(message: &Bitstring) -> Bitstring {
    let mut bits = Bitstring::with_capacity(message.len() + DOMAIN_SUFFIX.len());
    bits.extend(message);
    for bit in DOMAIN_SUFFIX {
        bits.push(bit);
    }
    bits
}

/// Tail of `pad10*1`: `j` zeros and a closing one, `j = (-(length + 1)) mod rate`.
///
/// `length` is the encoded length modulo the rate. The opening one of the
/// rule is already part of [`DOMAIN_SUFFIX`].
pub fn pad(rate: usize, length: usize) -> Bitstring {
    let j = (rate - (length + 1) % rate) % rate;
    let mut bits = Bitstring::with_capacity(j + 1);
    for _ in 0..j {
        bits.push(false);
    }
    bits.push(true);
    bits
}

/// Encoded message followed by its padding, a whole number of rate blocks.
pub fn padded(encoded: &Bitstring, rate: usize) -> Bitstring {
    encoded.concat(&pad(rate, encoded.len() % rate))
}
