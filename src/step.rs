//! Wires a block's move table, pruning table and symmetry rotations into a
//! `solve(root, max_depth, slackness)` function (§4.6). Two flavors: an
//! [`OptimalStep`] that searches a single block's [`MultiBlockCube`], and a
//! [`SplitStep`] that searches two blocks at once (e.g. F2L-1 expressed as a
//! pair of coupled 2x2x3s), whose per-representative estimator is the `max`
//! of the two sub-estimates while the overall estimator stays the `min`
//! across representatives.

use std::rc::Rc;

use crate::block::{Block, CoordinateBlockCube, MultiBlockCube};
use crate::cubie::{CubieCube, ELEMENTARY_TRANSFORMATIONS};
use crate::error::Result;
use crate::movetable::BlockMoveTable;
use crate::moves::{Move, N_MOVES};
use crate::node::Node;
use crate::pruningtable::PruningTable;
use crate::search::{search, SearchProblem};
use crate::symmetry::{conjugate_cubie_cube, move_conjugation_table};

fn cubie_from_moves(scramble: &[Move]) -> CubieCube {
    let mut cc = CubieCube::default();
    for &m in scramble {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
    }
    cc
}

/// Everything a step needs to expose to the multi-step driver (§4.7),
/// independent of what the step's internal search state actually looks like
/// (a single block's [`MultiBlockCube`] vs a split step's pair). The driver
/// only ever needs a move sequence and a depth back out of a solved cube.
pub trait Step {
    /// Search state type: a [`MultiBlockCube`] for an [`OptimalStep`], a
    /// `Vec<(CoordinateBlockCube, CoordinateBlockCube)>` for a [`SplitStep`].
    type Cube: Clone;

    fn initialize(&self, scramble: &[Move]) -> Rc<Node<Self::Cube>> {
        self.initialize_from_cubie(&cubie_from_moves(scramble))
    }

    fn initialize_from_cubie(&self, cc: &CubieCube) -> Rc<Node<Self::Cube>>;

    fn solve(
        &self,
        root: Rc<Node<Self::Cube>>,
        max_depth: u32,
        slackness: u32,
    ) -> Vec<Rc<Node<Self::Cube>>>;
}

/// A type-erased view of a [`Step`] exposing only what [`crate::multistep`]
/// needs: solve from a cubie-level state straight to `(move sequence,
/// depth)` pairs, with the block-coordinate machinery hidden behind it. This
/// is what lets the multi-step driver hold a list of heterogeneous steps
/// (a 2x2x2 `OptimalStep` followed by a 2x2x3 `OptimalStep` followed by an
/// F2L-1 `SplitStep`) without a common state type.
pub trait ErasedStep {
    fn solve_from_cubie(
        &self,
        cc: &CubieCube,
        max_depth: u32,
        slackness: u32,
    ) -> Vec<(Vec<Move>, u32)>;
}

impl<S: Step> ErasedStep for S {
    fn solve_from_cubie(
        &self,
        cc: &CubieCube,
        max_depth: u32,
        slackness: u32,
    ) -> Vec<(Vec<Move>, u32)> {
        let root = self.initialize_from_cubie(cc);
        self.solve(root, max_depth, slackness)
            .into_iter()
            .map(|n| (n.get_path(), n.depth))
            .collect()
    }
}

/// A step over a single [`Block`]: holds its move table, pruning table, and
/// the array of symmetry indices defining its `MultiBlockCube` (§4.6).
pub struct OptimalStep {
    pub block: Block,
    mtable: BlockMoveTable,
    ptable: PruningTable,
    rotations: Vec<u32>,
    conj_tables: Vec<[Move; N_MOVES]>,
}

impl OptimalStep {
    pub fn new(block: Block, rotations: Vec<u32>) -> Result<Self> {
        let mtable = BlockMoveTable::new(&block)?;
        let ptable = PruningTable::new(&block, &mtable)?;
        let conj_tables = rotations.iter().map(|&r| move_conjugation_table(r)).collect();
        Ok(Self {
            block,
            mtable,
            ptable,
            rotations,
            conj_tables,
        })
    }

    fn multi_from_cubie(&self, cc: &CubieCube) -> MultiBlockCube {
        self.rotations
            .iter()
            .map(|&r| {
                let conjugated = conjugate_cubie_cube(cc, r);
                self.block.to_coordinate_block_cube(&conjugated)
            })
            .collect()
    }
}

impl SearchProblem for OptimalStep {
    type State = MultiBlockCube;

    fn apply(&self, m: Move, state: &mut MultiBlockCube) {
        for (k, cbc) in state.iter_mut().enumerate() {
            let translated = self.conj_tables[k][m as usize];
            self.mtable.apply(translated, cbc);
        }
    }

    fn estimate(&self, state: &MultiBlockCube) -> u32 {
        state
            .iter()
            .map(|cbc| self.ptable.get_estimate(cbc) as u32)
            .min()
            .unwrap_or(0)
    }

    fn is_solved(&self, state: &MultiBlockCube) -> bool {
        state.iter().any(|cbc| self.block.is_solved(cbc))
    }
}

impl Step for OptimalStep {
    type Cube = MultiBlockCube;

    fn initialize_from_cubie(&self, cc: &CubieCube) -> Rc<Node<MultiBlockCube>> {
        Node::root(self.multi_from_cubie(cc))
    }

    fn solve(
        &self,
        root: Rc<Node<MultiBlockCube>>,
        max_depth: u32,
        slackness: u32,
    ) -> Vec<Rc<Node<MultiBlockCube>>> {
        search(self, root, max_depth, slackness)
    }
}

/// One representative's state for a [`SplitStep`]: the two sub-blocks'
/// coordinates, each under its own (possibly different) symmetry.
pub type SplitCbc = (CoordinateBlockCube, CoordinateBlockCube);
pub type SplitMultiBlockCube = Vec<SplitCbc>;

/// A step composing two blocks that must be solved simultaneously (§4.6): for
/// each representative `k`, `rotations[k] = (sym_a, sym_b)` gives the
/// symmetry applied to block 1 and block 2 respectively. F2L-1 instantiates
/// this with `block1 == block2` (the same 2x2x3 block, reused twice) and 24
/// representatives pairing up 2 of the 12 individual 2x2x3 rotations that
/// together make an F2L-1 (§4.4 "combined/derived heuristics").
pub struct SplitStep {
    pub block1: Block,
    pub block2: Block,
    mtable1: BlockMoveTable,
    mtable2: BlockMoveTable,
    ptable1: PruningTable,
    ptable2: PruningTable,
    rotations: Vec<(u32, u32)>,
    conj1: Vec<[Move; N_MOVES]>,
    conj2: Vec<[Move; N_MOVES]>,
}

impl SplitStep {
    pub fn new(block1: Block, block2: Block, rotations: Vec<(u32, u32)>) -> Result<Self> {
        let mtable1 = BlockMoveTable::new(&block1)?;
        let mtable2 = BlockMoveTable::new(&block2)?;
        let ptable1 = PruningTable::new(&block1, &mtable1)?;
        let ptable2 = PruningTable::new(&block2, &mtable2)?;
        let conj1 = rotations.iter().map(|&(a, _)| move_conjugation_table(a)).collect();
        let conj2 = rotations.iter().map(|&(_, b)| move_conjugation_table(b)).collect();
        Ok(Self {
            block1,
            block2,
            mtable1,
            mtable2,
            ptable1,
            ptable2,
            rotations,
            conj1,
            conj2,
        })
    }

    fn multi_from_cubie(&self, cc: &CubieCube) -> SplitMultiBlockCube {
        self.rotations
            .iter()
            .map(|&(sym_a, sym_b)| {
                let c1 = conjugate_cubie_cube(cc, sym_a);
                let c2 = conjugate_cubie_cube(cc, sym_b);
                (
                    self.block1.to_coordinate_block_cube(&c1),
                    self.block2.to_coordinate_block_cube(&c2),
                )
            })
            .collect()
    }

    fn pair_estimate(&self, cbc1: &CoordinateBlockCube, cbc2: &CoordinateBlockCube) -> u32 {
        let e1 = self.ptable1.get_estimate(cbc1) as u32;
        let e2 = self.ptable2.get_estimate(cbc2) as u32;
        e1.max(e2)
    }
}

impl SearchProblem for SplitStep {
    type State = SplitMultiBlockCube;

    fn apply(&self, m: Move, state: &mut SplitMultiBlockCube) {
        for (k, (cbc1, cbc2)) in state.iter_mut().enumerate() {
            self.mtable1.apply(self.conj1[k][m as usize], cbc1);
            self.mtable2.apply(self.conj2[k][m as usize], cbc2);
        }
    }

    fn estimate(&self, state: &SplitMultiBlockCube) -> u32 {
        state
            .iter()
            .map(|(cbc1, cbc2)| self.pair_estimate(cbc1, cbc2))
            .min()
            .unwrap_or(0)
    }

    fn is_solved(&self, state: &SplitMultiBlockCube) -> bool {
        state
            .iter()
            .any(|(cbc1, cbc2)| self.block1.is_solved(cbc1) && self.block2.is_solved(cbc2))
    }
}

impl Step for SplitStep {
    type Cube = SplitMultiBlockCube;

    fn initialize_from_cubie(&self, cc: &CubieCube) -> Rc<Node<SplitMultiBlockCube>> {
        Node::root(self.multi_from_cubie(cc))
    }

    fn solve(
        &self,
        root: Rc<Node<SplitMultiBlockCube>>,
        max_depth: u32,
        slackness: u32,
    ) -> Vec<Rc<Node<SplitMultiBlockCube>>> {
        search(self, root, max_depth, slackness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::{Corner, Edge};
    use crate::moves::Move;
    use crate::symmetry::symmetry_index;

    fn dlb_222_rotations() -> Vec<u32> {
        (0..4)
            .flat_map(|c_y| (0..2).map(move |c_z2| symmetry_index(0, c_y, c_z2, 0)))
            .collect()
    }

    fn dlb_222_step() -> OptimalStep {
        let block = Block::new("DLB_222_test", vec![Corner::Dlb], vec![Edge::Dl, Edge::Lb, Edge::Db]);
        OptimalStep::new(block, dlb_222_rotations()).unwrap()
    }

    #[test]
    fn empty_scramble_solves_at_depth_zero() {
        let step = dlb_222_step();
        let root = step.initialize(&[]);
        let solutions = step.solve(root, 6, 0);
        assert!(!solutions.is_empty());
        assert_eq!(solutions[0].depth, 0);
    }

    #[test]
    fn scramble_solves_within_four_moves() {
        // Spec S2: F2 R U R' on the DLB 2x2x2 solves within depth 4.
        let step = dlb_222_step();
        let root = step.initialize(&[Move::F2, Move::R, Move::U, Move::R3]);
        let solutions = step.solve(root, 10, 0);
        assert!(!solutions.is_empty());
        assert!(solutions.iter().all(|n| n.depth <= 4));
        assert!(solutions.iter().any(|n| n.depth == solutions[0].depth));
    }

    #[test]
    fn solution_move_sequence_actually_solves_the_block() {
        let step = dlb_222_step();
        let scramble = [Move::F2, Move::R, Move::U, Move::R3];
        let root = step.initialize(&scramble);
        let solutions = step.solve(root, 10, 0);
        let node = &solutions[0];
        let path = node.get_path();

        let mut cc = cubie_from_moves(&scramble);
        for m in path {
            cc.apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
        }
        let final_state = step.multi_from_cubie(&cc);
        assert!(step.is_solved(&final_state));
    }

    #[test]
    fn erased_step_matches_direct_solve() {
        let step = dlb_222_step();
        let scramble = [Move::F2, Move::R, Move::U, Move::R3];
        let cc = cubie_from_moves(&scramble);
        let erased: &dyn ErasedStep = &step;
        let via_erased = erased.solve_from_cubie(&cc, 10, 0);

        let root = step.initialize_from_cubie(&cc);
        let via_direct = step.solve(root, 10, 0);

        assert_eq!(via_erased.len(), via_direct.len());
        for ((_, depth), node) in via_erased.iter().zip(via_direct.iter()) {
            assert_eq!(*depth, node.depth);
        }
    }
}
