//! The cube's 48-element rotation/reflection group (§4.3), parameterized by
//! four generators (`S_URF` 3-fold, `y` 4-fold, `z2` 2-fold, `LR` mirror
//! 2-fold), plus move conjugation: for a symmetry `sigma` and move `m`,
//! `sigma * m * sigma^-1` translated into another HTM move so that the same
//! move tables can serve a conjugated coordinate.

use crate::cubie::{Elementary, CubieCube, ELEMENTARY_TRANSFORMATIONS};
use crate::moves::{Move, ALL_MOVES, N_MOVES};

pub const N_SURF: u32 = 3;
pub const N_Y: u32 = 4;
pub const N_Z2: u32 = 2;
pub const N_LR: u32 = 2;
/// Order of the full rotation/reflection group.
pub const N_SYM: u32 = 48;

/// Packs `(c_surf, c_y, c_z2, c_lr)` into a single index in `[0, 48)`.
pub fn symmetry_index(c_surf: u32, c_y: u32, c_z2: u32, c_lr: u32) -> u32 {
    debug_assert!(c_surf < N_SURF && c_y < N_Y && c_z2 < N_Z2 && c_lr < N_LR);
    c_lr + N_LR * (c_z2 + N_Z2 * (c_y + N_Y * c_surf))
}

/// Inverse of [`symmetry_index`].
pub fn symmetry_index_to_components(index: u32) -> (u32, u32, u32, u32) {
    debug_assert!(index < N_SYM);
    let mut div = index;
    let c_lr = div % N_LR;
    div /= N_LR;
    let c_z2 = div % N_Z2;
    div /= N_Z2;
    let c_y = div % N_Y;
    div /= N_Y;
    let c_surf = div;
    (c_surf, c_y, c_z2, c_lr)
}

/// `sigma^-1 * cube * sigma` at the cubie level, for `sigma` given by its
/// symmetry index.
pub fn conjugate_cubie_cube(cube: &CubieCube, sym_index: u32) -> CubieCube {
    let sigma = symmetry_cubie_cube(sym_index);
    let sigma_inv = symmetry_inverse_cubie_cube(sym_index);
    let mut result = sigma_inv;
    result.apply(cube);
    result.apply(&sigma);
    result
}

/// The `CubieCube` for symmetry `sym_index`, built by composing the
/// generators the same number of times as [`symmetry_index_to_components`]
/// reports (LR, then z2, then y, then S_URF, matching
/// `original_source/src/symmetry.hpp`'s `get_move_permutation`).
pub fn symmetry_cubie_cube(sym_index: u32) -> CubieCube {
    let (c_surf, c_y, c_z2, c_lr) = symmetry_index_to_components(sym_index);
    let mut cc = CubieCube::default();
    for _ in 0..c_lr {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[Elementary::SLr as usize]);
    }
    for _ in 0..c_z2 {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[Elementary::SZ2 as usize]);
    }
    for _ in 0..c_y {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[Elementary::SY as usize]);
    }
    for _ in 0..c_surf {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[Elementary::SUrf as usize]);
    }
    cc
}

fn symmetry_inverse_cubie_cube(sym_index: u32) -> CubieCube {
    let (c_surf, c_y, c_z2, c_lr) = symmetry_index_to_components(sym_index);
    let mut cc = CubieCube::default();
    for _ in 0..c_surf {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[Elementary::SUrf2 as usize]);
    }
    for _ in 0..c_y {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[Elementary::SY3 as usize]);
    }
    for _ in 0..c_z2 {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[Elementary::SZ2 as usize]);
    }
    for _ in 0..c_lr {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[Elementary::SLr as usize]);
    }
    cc
}

/// Per-generator move-conjugation tables: `table[m as usize]` is
/// `generator * m * generator^-1`, expressed as another HTM move. Data
/// grounded in `original_source/src/symmetry.hpp`.
const S_URF_MOVE_CONJ: [Move; N_MOVES] = {
    use Move::*;
    [
        F, F2, F3, // U, U2, U'
        B, B2, B3, // D, D2, D'
        U, U2, U3, // R, R2, R'
        D, D2, D3, // L, L2, L'
        R, R2, R3, // F, F2, F'
        L, L2, L3, // B, B2, B'
    ]
};

const Y_MOVE_CONJ: [Move; N_MOVES] = {
    use Move::*;
    [
        U, U2, U3, D, D2, D3, B, B2, B3, F, F2, F3, R, R2, R3, L, L2, L3,
    ]
};

const Z2_MOVE_CONJ: [Move; N_MOVES] = {
    use Move::*;
    [
        D, D2, D3, U, U2, U3, L, L2, L3, R, R2, R3, F, F2, F3, B, B2, B3,
    ]
};

const LR_MOVE_CONJ: [Move; N_MOVES] = {
    use Move::*;
    [
        U3, U2, U, D3, D2, D, L3, L2, L, R3, R2, R, F3, F2, F, B3, B2, B,
    ]
};

fn permute_moves(mp1: &[Move; N_MOVES], mp2: &[Move; N_MOVES]) -> [Move; N_MOVES] {
    let mut out = [Move::U; N_MOVES];
    for (i, &m) in ALL_MOVES.iter().enumerate() {
        out[i] = mp1[mp2[m as usize] as usize];
    }
    out
}

/// The move-translation permutation for symmetry `sym_index`: `table[m as
/// usize]` is `m' = sigma * m * sigma^-1`. Composed from the four
/// per-generator tables in the same order `symmetry_cubie_cube` composes
/// the generators themselves.
pub fn move_conjugation_table(sym_index: u32) -> [Move; N_MOVES] {
    let (c_surf, c_y, c_z2, c_lr) = symmetry_index_to_components(sym_index);
    let mut table = ALL_MOVES;
    for _ in 0..c_lr {
        table = permute_moves(&table, &LR_MOVE_CONJ);
    }
    for _ in 0..c_z2 {
        table = permute_moves(&table, &Z2_MOVE_CONJ);
    }
    for _ in 0..c_y {
        table = permute_moves(&table, &Y_MOVE_CONJ);
    }
    for _ in 0..c_surf {
        table = permute_moves(&table, &S_URF_MOVE_CONJ);
    }
    table
}

/// The move conjugated by symmetry `sym_index`: `sigma * m * sigma^-1`.
pub fn conjugate_move(m: Move, sym_index: u32) -> Move {
    move_conjugation_table(sym_index)[m as usize]
}
