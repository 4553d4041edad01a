//! Worked blocks/steps for a CFOP-style three-step skeleton: a DLB 2x2x2
//! corner block, a DL 2x2x3 block, and F2L-1 expressed as a pair of coupled
//! 2x2x3s (§4.4 "combined/derived heuristics", §4.6 "split step"). Grounded
//! in `original_source/script/222.hpp`, `src/223.hpp` and `src/F2L-1.hpp`;
//! the concrete list of named blocks and method scripts is otherwise named
//! as an external collaborator, but these three are worked all the way
//! through as the system's reference method.

use crate::block::Block;
use crate::cubie::{Corner, Edge};
use crate::error::Result;
use crate::step::{OptimalStep, SplitStep};
use crate::symmetry::symmetry_index;

/// `DLB_222`: one corner (DLB) and its three adjacent edges.
pub fn dlb_222_block() -> Block {
    Block::new("DLB_222", vec![Corner::Dlb], vec![Edge::Dl, Edge::Lb, Edge::Db])
}

/// The 8 symmetries under which a 2x2x2 corner block is equally good: the 4
/// rotations about the vertical axis, crossed with the z2 rotation that
/// swaps top and bottom.
pub fn dlb_222_rotations() -> Vec<u32> {
    vec![
        symmetry_index(0, 0, 0, 0),
        symmetry_index(0, 1, 0, 0),
        symmetry_index(0, 2, 0, 0),
        symmetry_index(0, 3, 0, 0),
        symmetry_index(0, 0, 1, 0),
        symmetry_index(0, 1, 1, 0),
        symmetry_index(0, 2, 1, 0),
        symmetry_index(0, 3, 1, 0),
    ]
}

pub fn dlb_222_step() -> Result<OptimalStep> {
    OptimalStep::new(dlb_222_block(), dlb_222_rotations())
}

/// `DL_223`: the 2x2x3 block built from the DLF/DLB corners and the five
/// edges surrounding the D-L edge. The pruning table for the full 2x2x3 is
/// large enough that the split-step F2L-1 solver below instead treats it as
/// two coupled 1x2x3s sharing the DL edge (§4.4).
pub fn dl_223_block() -> Block {
    Block::new(
        "DL_223",
        vec![Corner::Dlf, Corner::Dlb],
        vec![Edge::Lf, Edge::Lb, Edge::Df, Edge::Db, Edge::Dl],
    )
}

/// The 12 symmetries taking the DL_223 block to each of the 12
/// edge-of-a-layer positions a 2x2x3 can occupy (§4.6).
pub fn dl_223_rotations() -> Vec<u32> {
    vec![
        symmetry_index(0, 0, 0, 0), // DL
        symmetry_index(0, 3, 0, 0), // DB
        symmetry_index(0, 2, 0, 0), // DR
        symmetry_index(0, 1, 0, 0), // DF
        symmetry_index(0, 1, 1, 0), // UF
        symmetry_index(0, 2, 1, 0), // UL
        symmetry_index(0, 3, 1, 0), // UB
        symmetry_index(0, 0, 1, 0), // UR
        symmetry_index(2, 0, 0, 0), // LB
        symmetry_index(2, 1, 0, 0), // LF
        symmetry_index(2, 3, 0, 0), // RB
        symmetry_index(2, 2, 0, 0), // RF
    ]
}

pub fn dl_223_step() -> Result<OptimalStep> {
    OptimalStep::new(dl_223_block(), dl_223_rotations())
}

/// The 24 pairs of `dl_223_rotations()` indices whose simultaneous solution
/// means an F2L-1: each pair shares one edge of the 2x2x3, so solving both
/// halves solves the full first-two-layers-minus-one-slot (§4.4, §4.6).
const F2L_MINUS_1_BLOCK_PAIRS: [(usize, usize); 24] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (8, 0),
    (0, 9),
    (9, 5),
    (5, 8),
    (2, 10),
    (10, 7),
    (7, 11),
    (11, 2),
    (3, 9),
    (9, 4),
    (4, 11),
    (11, 3),
    (1, 8),
    (8, 6),
    (6, 10),
    (10, 1),
];

/// F2L-1's 24 representatives, each a `(sym_a, sym_b)` pair of `dl_223`
/// symmetries, built from [`F2L_MINUS_1_BLOCK_PAIRS`].
pub fn f2l_minus_1_rotations() -> Vec<(u32, u32)> {
    let base = dl_223_rotations();
    F2L_MINUS_1_BLOCK_PAIRS
        .iter()
        .map(|&(k, l)| (base[k], base[l]))
        .collect()
}

pub fn f2l_minus_1_step() -> Result<SplitStep> {
    SplitStep::new(dl_223_block(), dl_223_block(), f2l_minus_1_rotations())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::{CubieCube, ELEMENTARY_TRANSFORMATIONS};
    use crate::moves::Move;
    use crate::step::Step;

    fn cubie_from_moves(scramble: &[Move]) -> CubieCube {
        let mut cc = CubieCube::default();
        for &m in scramble {
            cc.apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
        }
        cc
    }

    #[test]
    fn dlb_222_empty_scramble_solves_at_depth_zero() {
        let step = dlb_222_step().unwrap();
        let root = step.initialize(&[]);
        let solutions = step.solve(root, 6, 0);
        assert!(!solutions.is_empty());
        assert_eq!(solutions[0].depth, 0);
    }

    #[test]
    fn dlb_222_short_scramble_within_depth_four() {
        // Spec S2.
        let step = dlb_222_step().unwrap();
        let scramble = [Move::F2, Move::R, Move::U, Move::R3];
        let root = step.initialize(&scramble);
        let solutions = step.solve(root, 10, 0);
        assert!(!solutions.is_empty());
        assert!(solutions.iter().all(|n| n.depth <= 4));
    }

    #[test]
    #[ignore] // expensive: generates/loads the DL_223 move+pruning tables
    fn dl_223_wca_scramble_optimal_depth_is_ten() {
        // Spec S4: the WCA WR scramble's DL 2x2x3 optimal depth is 10.
        let scramble: Vec<Move> = [
            Move::R3, Move::U3, Move::F, Move::D2, Move::R2, Move::F3, Move::L2, Move::D2,
            Move::F3, Move::L, Move::U3, Move::B, Move::U3, Move::D3, Move::F2, Move::B2,
            Move::L2, Move::D, Move::F2, Move::U2, Move::D, Move::R3, Move::U3, Move::F,
        ]
        .to_vec();

        let step = dl_223_step().unwrap();
        let root = step.initialize(&scramble);
        let solutions = step.solve(root, 12, 0);
        assert!(!solutions.is_empty());
        assert_eq!(solutions[0].depth, 10);
    }

    #[test]
    #[ignore] // expensive: generates/loads both DL_223 tables twice over
    fn f2l_minus_1_empty_scramble_solves_at_depth_zero() {
        let step = f2l_minus_1_step().unwrap();
        let root = step.initialize(&[]);
        let solutions = step.solve(root, 6, 0);
        assert!(!solutions.is_empty());
        assert_eq!(solutions[0].depth, 0);
    }

    #[test]
    fn rotations_tables_have_expected_lengths() {
        assert_eq!(dlb_222_rotations().len(), 8);
        assert_eq!(dl_223_rotations().len(), 12);
        assert_eq!(f2l_minus_1_rotations().len(), 24);
    }

    #[test]
    fn block_ids_are_distinct() {
        let a = dlb_222_block();
        let b = dl_223_block();
        assert_ne!(a.id, b.id);
        let _ = cubie_from_moves(&[Move::R]);
    }
}
