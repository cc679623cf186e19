//! Keccak-f[1600] permutation implementation.
//!
//! Each of the 24 rounds applies, in order:
//! 1. theta (column parity mixing)
//! 2. rho (per-lane rotation)
//! 3. pi (lane transposition)
//! 4. chi (non-linear row mixing)
//! 5. iota (round constant into lane (0, 0))
//!
//! The step mappings are pure: each returns a new state.

use super::{ROTATION_OFFSETS, ROUNDS, ROUND_CONSTANTS};
use crate::params::LANE_BITS;
use crate::state::{hex_constant_to_lane, Lane, State};

/// theta: XOR every lane with the parities of two neighbouring columns.
///
/// `C[x]` is the parity of column x, `D[x] = C[x-1] ^ rotl(C[x+1], 1)`.
pub fn theta(state: &State) -> State {
    let a = state.lanes();
    let mut c: [Lane; 5] = [0; 5];
    for x in 0..5 {
        c[x] = a[x][0] ^ a[x][1] ^ a[x][2] ^ a[x][3] ^ a[x][4];
    }

    let mut out = *a;
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            out[x][y] ^= d;
        }
    }
    State::from_lanes(out)
}

/// rho: rotate lane (x, y) left by its fixed offset.
pub fn rho(state: &State) -> State {
    let a = state.lanes();
    let mut out = [[0; 5]; 5];
    for x in 0..5 {
        for y in 0..5 {
            out[x][y] = a[x][y].rotate_left(ROTATION_OFFSETS[x][y]);
        }
    }
    State::from_lanes(out)
}

/// pi: `A'[x][y] = A[(x + 3y) mod 5][x]`.
pub fn pi(state: &State) -> State {
    let a = state.lanes();
    let mut out = [[0; 5]; 5];
    for x in 0..5 {
        for y in 0..5 {
            out[x][y] = a[(x + 3 * y) % 5][x];
        }
    }
    State::from_lanes(out)
}

/// chi: `A'[x][y] = A[x][y] ^ (!A[x+1][y] & A[x+2][y])`.
pub fn chi(state: &State) -> State {
    let a = state.lanes();
    let mut out = [[0; 5]; 5];
    for x in 0..5 {
        for y in 0..5 {
            out[x][y] = a[x][y] ^ (!a[(x + 1) % 5][y] & a[(x + 2) % 5][y]);
        }
    }
    State::from_lanes(out)
}

/// iota: XOR the round constant into lane (0, 0).
pub fn iota(state: &State, round_index: usize) -> State {
    let mut out = *state;
    let rc = hex_constant_to_lane(ROUND_CONSTANTS[round_index], LANE_BITS);
    out.set_lane(0, 0, state.lane(0, 0) ^ rc);
    out
}

/// One full round.
pub fn round(state: &State, round_index: usize) -> State {
    iota(&chi(&pi(&rho(&theta(state)))), round_index)
}

/// Complete Keccak-f[1600] permutation (24 rounds).
pub fn permute(state: &State) -> State {
    let mut st = *state;
    for round_index in 0..ROUNDS {
        st = round(&st, round_index);
    }
    st
}

/// Permutation with trace output for debugging.
///
/// Returns (final_state, round_traces) where each trace entry is the state
/// after that round.
pub fn permute_with_trace(state: &State) -> (State, Vec<State>) {
    let mut st = *state;
    let mut traces = Vec::with_capacity(ROUNDS);

    for round_index in 0..ROUNDS {
        st = round(&st, round_index);
        traces.push(st);
    }

    (st, traces)
}
