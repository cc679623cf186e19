// Build script that generates the Keccak-f[1600] constant tables.
// Build scripts do not ship in the library, so we allow expect().
#![allow(clippy::expect_used)]
//
// Derives from the FIPS 202 definitions and writes `params_generated.rs`:
// - `ROUND_CONSTANTS` - iota constants from the rc(t) LFSR (Algorithm 5)
// - `ROTATION_OFFSETS` - rho offsets from the (x, y) walk (Algorithm 2)

use std::env;
use std::fs;
use std::path::Path;

/// log2 of the lane width (w = 64).
const L: u32 = 6;

/// Number of rounds, 12 + 2l.
const ROUNDS: usize = 12 + 2 * L as usize;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let round_constants: Vec<u64> = (0..ROUNDS).map(round_constant).collect();
    let rotation_offsets = rotation_offsets();

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let out_path = Path::new(&out_dir);

    generate_params_rs(out_path, &round_constants, &rotation_offsets);
}

/// One output bit of the LFSR x^8 + x^6 + x^5 + x^4 + 1, seeded with 1.
fn rc_bit(t: usize) -> u64 {
    let steps = t % 255;
    let mut r: u16 = 1;
    for _ in 0..steps {
        r <<= 1;
        if r & 0x100 != 0 {
            r ^= 0x171;
        }
    }
    u64::from(r & 1)
}

/// The iota constant for round `ir`: bit 2^j - 1 is rc(j + 7 ir).
fn round_constant(ir: usize) -> u64 {
    let mut rc = 0u64;
    for j in 0..=L as usize {
        if rc_bit(j + 7 * ir) == 1 {
            rc |= 1 << ((1usize << j) - 1);
        }
    }
    rc
}

/// Rotation offsets indexed `[x][y]`; lane (0, 0) stays at zero.
fn rotation_offsets() -> [[u32; 5]; 5] {
    let w = 1u32 << L;
    let mut offsets = [[0u32; 5]; 5];
    let (mut x, mut y) = (1usize, 0usize);
    for t in 0..24u32 {
        offsets[x][y] = ((t + 1) * (t + 2) / 2) % w;
        let next_y = (2 * x + 3 * y) % 5;
        x = y;
        y = next_y;
    }
    offsets
}

fn generate_params_rs(out_path: &Path, round_constants: &[u64], offsets: &[[u32; 5]; 5]) {
    let mut code = String::new();

    code.push_str(&format!(
        r#"// Keccak-f[1600] tables generated by build.rs.
//
// DO NOT EDIT - regenerate by rebuilding the crate.

/// Number of permutation rounds (12 + 2l with l = 6).
pub const ROUNDS: usize = {};

"#,
        ROUNDS
    ));

    code.push_str(&format!(
        "/// Iota round constants, one per round.\npub const ROUND_CONSTANTS: [u64; {}] = [\n",
        round_constants.len()
    ));
    for (round, rc) in round_constants.iter().enumerate() {
        code.push_str(&format!("    0x{:016x}, // round {}\n", rc, round));
    }
    code.push_str("];\n\n");

    code.push_str("/// Rho rotation offsets, indexed `[x][y]`.\npub const ROTATION_OFFSETS: [[u32; 5]; 5] = [\n");
    for column in offsets {
        let cells: Vec<String> = column.iter().map(|r| r.to_string()).collect();
        code.push_str(&format!("    [{}],\n", cells.join(", ")));
    }
    code.push_str("];\n");

    fs::write(out_path.join("params_generated.rs"), code)
        .expect("Failed to write params_generated.rs");
}
