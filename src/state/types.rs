//! State types: Lane, State.

use crate::codec::Bitstring;
use crate::params::{LANE_BITS, STATE_BITS};
use std::ops::{BitXor, BitXorAssign};

/// One 64-bit lane; bit `z` is bit `z` of the word.
pub type Lane = u64;

/// Number of lanes in the state (5 x 5).
pub const LANES: usize = 25;

/// Bytes per lane.
const LANE_BYTES: usize = LANE_BITS / 8;

/// The Keccak-f[1600] state: a 5x5 grid of lanes indexed `[x][y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct State {
    lanes: [[Lane; 5]; 5],
}

impl State {
    /// All-zero state.
    pub const fn zero() -> Self {
        Self { lanes: [[0; 5]; 5] }
    }

    /// Build a state from lanes indexed `[x][y]`.
    pub const fn from_lanes(lanes: [[Lane; 5]; 5]) -> Self {
        Self { lanes }
    }

    /// Lanes indexed `[x][y]`.
    pub fn lanes(&self) -> &[[Lane; 5]; 5] {
        &self.lanes
    }

    /// Lane at column `x`, row `y`.
    pub fn lane(&self, x: usize, y: usize) -> Lane {
        self.lanes[x][y]
    }

    /// Replace the lane at column `x`, row `y`.
    pub fn set_lane(&mut self, x: usize, y: usize, lane: Lane) {
        self.lanes[x][y] = lane;
    }

    /// Bit `z` of lane (x, y).
    pub fn bit(&self, x: usize, y: usize, z: usize) -> bool {
        (self.lanes[x][y] >> z) & 1 == 1
    }

    /// Lay a packed block onto the lattice.
    ///
    /// Flat bit `64 * (5y + x) + z` lands on lane (x, y), bit z. Bits past the
    /// end of `block` are zero; anything past 1600 bits is ignored.
    pub fn from_block_bytes(block: &[u8]) -> Self {
        let mut state = Self::zero();
        for (i, chunk) in block.chunks(LANE_BYTES).take(LANES).enumerate() {
            let mut word = [0u8; LANE_BYTES];
            word[..chunk.len()].copy_from_slice(chunk);
            state.lanes[i % 5][i / 5] = Lane::from_le_bytes(word);
        }
        state
    }

    /// Lay a bitstring onto the lattice (see [`State::from_block_bytes`]).
    pub fn from_bits(bits: &Bitstring) -> Self {
        Self::from_block_bytes(bits.as_bytes())
    }

    /// The full 1600-bit state as a bitstring in flat order.
    pub fn to_bits(&self) -> Bitstring {
        Bitstring::from_bytes(&self.to_bytes(STATE_BITS))
    }

    /// First `bits / 8` bytes of the state, lanes in flat order.
    ///
    /// Each lane is written little-endian, which puts flat bit `8k + j` at
    /// bit `j` of byte `k` and undoes the LSB-first encoding of the input.
    pub fn to_bytes(&self, bits: usize) -> Vec<u8> {
        let n = bits.min(STATE_BITS) / 8;
        let mut out = Vec::with_capacity(LANES * LANE_BYTES);
        for y in 0..5 {
            for x in 0..5 {
                out.extend_from_slice(&self.lanes[x][y].to_le_bytes());
            }
        }
        out.truncate(n);
        out
    }

    /// Lowercase hex of the first `bits` bits, `bits / 4` characters long.
    pub fn to_hex(&self, bits: usize) -> String {
        let mut digest = hex::encode(self.to_bytes(bits.div_ceil(8) * 8));
        digest.truncate(bits / 4);
        digest
    }
}

impl BitXor for State {
    type Output = State;

    fn bitxor(mut self, rhs: State) -> State {
        self ^= rhs;
        self
    }
}

impl BitXorAssign for State {
    fn bitxor_assign(&mut self, rhs: State) {
        for x in 0..5 {
            for y in 0..5 {
                self.lanes[x][y] ^= rhs.lanes[x][y];
            }
        }
    }
}

/// Convert a 64-bit constant into a `w`-bit lane.
///
/// Keeps the low `w` bits. In lane order the constant's least significant
/// bit is z = 0, so no reordering is needed beyond the mask.
pub fn hex_constant_to_lane(value: u64, w: usize) -> Lane {
    if w >= LANE_BITS {
        value
    } else {
        value & ((1u64 << w) - 1)
    }
}
