//! A block (§3): a named, fixed subset of corners and edges, together with
//! the conversions between a full/restricted `CubieCube` and the compact
//! six-integer `CoordinateBlockCube` coordinate used by move/pruning tables
//! and search.

use crate::coordinate::{co_from_index, co_index, eo_from_index, eo_index, layout_from_index,
    layout_index, permutation_from_index, permutation_index};
use crate::cubie::{Corner, CubieCube, Edge, NC, NE, NONE_CO, NONE_CORNER, NONE_EDGE, NONE_EO};

/// The coordinate-space image of a block's state: a corner layout index, a
/// corner permutation index, a corner orientation index, and the same three
/// for edges. Six small integers stand in for the full cubie-level state of
/// the pieces the block owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoordinateBlockCube {
    pub ccl: u64,
    pub ccp: u64,
    pub cco: u64,
    pub cel: u64,
    pub cep: u64,
    pub ceo: u64,
}

impl CoordinateBlockCube {
    pub fn is_solved(&self) -> bool {
        *self == Self::default()
    }
}

/// An array of `CoordinateBlockCube`s, one per symmetry-class representative
/// tracked for a search. Kept `Vec`-backed since the representative count is
/// chosen per step, not fixed at compile time.
pub type MultiBlockCube = Vec<CoordinateBlockCube>;

/// A named subset of corners and edges tracked together through a search.
/// `corners`/`edges` are kept sorted by cubie-level canonical order so that
/// [`Block::id`] is stable regardless of construction order.
#[derive(Debug, Clone)]
pub struct Block {
    pub name: String,
    pub id: String,
    corners: Vec<Corner>,
    edges: Vec<Edge>,
    solved: CoordinateBlockCube,
}

impl Block {
    pub fn new(name: impl Into<String>, mut corners: Vec<Corner>, mut edges: Vec<Edge>) -> Self {
        corners.sort();
        corners.dedup();
        edges.sort();
        edges.dedup();
        let mut block = Self {
            name: name.into(),
            id: String::new(),
            corners,
            edges,
            solved: CoordinateBlockCube::default(),
        };
        block.id = block.compute_id();
        block.solved = block.to_coordinate_block_cube(&CubieCube::default());
        block
    }

    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn nc(&self) -> usize {
        self.corners.len()
    }

    pub fn ne(&self) -> usize {
        self.edges.len()
    }

    pub fn solved(&self) -> CoordinateBlockCube {
        self.solved
    }

    pub fn is_solved(&self, cbc: &CoordinateBlockCube) -> bool {
        *cbc == self.solved
    }

    fn c_contains(&self, c: u8) -> bool {
        (c as usize) < NC && self.corners.contains(&corner_from_u8(c))
    }

    fn e_contains(&self, e: u8) -> bool {
        (e as usize) < NE && self.edges.contains(&edge_from_u8(e))
    }

    /// `"{nc}C{corner_layout_id}_{ne}E{edge_layout_id}"`, a stable id
    /// determined entirely by which corners/edges the block owns.
    fn compute_id(&self) -> String {
        let mut corner_mask = [false; NC];
        for &c in &self.corners {
            corner_mask[c as usize] = true;
        }
        let mut edge_mask = [false; NE];
        for &e in &self.edges {
            edge_mask[e as usize] = true;
        }
        let c_id = layout_index(&corner_mask);
        let e_id = layout_index(&edge_mask);
        format!("{}C{}_{}E{}", self.nc(), c_id, self.ne(), e_id)
    }

    /// Projects a full `CubieCube` onto this block's coordinate space.
    pub fn to_coordinate_block_cube(&self, cc: &CubieCube) -> CoordinateBlockCube {
        let mut cl = [false; NC];
        let mut cp = Vec::with_capacity(self.nc());
        let mut co = Vec::with_capacity(self.nc());
        for slot in 0..NC {
            if self.c_contains(cc.cp[slot]) {
                cl[slot] = true;
                cp.push(cc.cp[slot]);
                co.push(cc.co[slot]);
            }
        }

        let mut el = [false; NE];
        let mut ep = Vec::with_capacity(self.ne());
        let mut eo = Vec::with_capacity(self.ne());
        for slot in 0..NE {
            if self.e_contains(cc.ep[slot]) {
                el[slot] = true;
                ep.push(cc.ep[slot]);
                eo.push(cc.eo[slot]);
            }
        }

        let mut cbc = CoordinateBlockCube::default();
        if self.nc() > 0 {
            cbc.ccl = layout_index(&cl);
            cbc.ccp = permutation_index(&cp);
            cbc.cco = co_index(&co);
        }
        if self.ne() > 0 {
            cbc.cel = layout_index(&el);
            cbc.cep = permutation_index(&ep);
            cbc.ceo = eo_index(&eo);
        }
        cbc
    }

    /// Reconstructs a `CubieCube` from a coordinate in this block's space.
    /// Slots outside the block are filled with the "inconsistent" sentinel
    /// values ([`NONE_CORNER`]/[`NONE_CO`]/[`NONE_EDGE`]/[`NONE_EO`]), so the
    /// result must not be used as the right-hand side of `apply`.
    pub fn to_cubie_cube(&self, cbc: &CoordinateBlockCube) -> CubieCube {
        let mut cc = CubieCube::new([NONE_CORNER; NC], [NONE_CO; NC], [NONE_EDGE; NE], [NONE_EO; NE]);

        if self.nc() > 0 {
            let mut cl = vec![false; NC];
            layout_from_index(cbc.ccl, self.nc() as u32, &mut cl);
            let mut cp = vec![0u8; self.nc()];
            permutation_from_index(cbc.ccp, &mut cp);
            let mut co = vec![0u8; self.nc()];
            co_from_index(cbc.cco, &mut co);

            let mut k = 0usize;
            for slot in 0..NC {
                if cl[slot] && k < self.nc() {
                    cc.cp[slot] = self.corners[cp[k] as usize] as u8;
                    cc.co[slot] = co[k];
                    k += 1;
                }
            }
        }

        if self.ne() > 0 {
            let mut el = vec![false; NE];
            layout_from_index(cbc.cel, self.ne() as u32, &mut el);
            let mut ep = vec![0u8; self.ne()];
            permutation_from_index(cbc.cep, &mut ep);
            let mut eo = vec![0u8; self.ne()];
            eo_from_index(cbc.ceo, &mut eo);

            let mut k = 0usize;
            for slot in 0..NE {
                if el[slot] && k < self.ne() {
                    cc.ep[slot] = self.edges[ep[k] as usize] as u8;
                    cc.eo[slot] = eo[k];
                    k += 1;
                }
            }
        }

        cc
    }
}

fn corner_from_u8(c: u8) -> Corner {
    crate::cubie::ALL_CORNERS[c as usize]
}

fn edge_from_u8(e: u8) -> Edge {
    crate::cubie::ALL_EDGES[e as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::ELEMENTARY_TRANSFORMATIONS;
    use crate::moves::Move;

    fn dlb_222() -> Block {
        Block::new("DLB_222", vec![Corner::Dlb], vec![Edge::Dl, Edge::Lb, Edge::Db])
    }

    #[test]
    fn solved_cube_projects_to_solved_block() {
        let block = dlb_222();
        let cbc = block.to_coordinate_block_cube(&CubieCube::default());
        assert!(block.is_solved(&cbc));
        assert_eq!(cbc, block.solved());
    }

    #[test]
    fn id_is_stable_regardless_of_construction_order() {
        let a = Block::new("a", vec![Corner::Dlb], vec![Edge::Dl, Edge::Db, Edge::Lb]);
        let b = Block::new("b", vec![Corner::Dlb], vec![Edge::Lb, Edge::Dl, Edge::Db]);
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn projection_round_trips_through_cubie_cube() {
        let block = dlb_222();
        let mut cc = CubieCube::default();
        for m in [Move::R, Move::U, Move::F, Move::D2, Move::L3] {
            cc.apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
        }
        let cbc = block.to_coordinate_block_cube(&cc);
        let reconstructed = block.to_cubie_cube(&cbc);

        for &c in block.corners() {
            assert_eq!(reconstructed.cp[c as usize], cc.cp[c as usize]);
            assert_eq!(reconstructed.co[c as usize], cc.co[c as usize]);
        }
        for &e in block.edges() {
            assert_eq!(reconstructed.ep[e as usize], cc.ep[e as usize]);
            assert_eq!(reconstructed.eo[e as usize], cc.eo[e as usize]);
        }
    }

    #[test]
    fn a_move_disturbing_the_block_unsolves_it() {
        let block = dlb_222();
        let mut cc = CubieCube::default();
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[Move::R as usize]);
        let cbc = block.to_coordinate_block_cube(&cc);
        assert!(!block.is_solved(&cbc));
    }
}
