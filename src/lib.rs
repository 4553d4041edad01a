//! # blockcube
//! `blockcube`: a multi-step coordinate-search engine for the 3x3 Rubik's
//! cube. Solves named sub-blocks of the cube (a 2x2x2 corner, a 2x2x3 layer
//! slab, a coupled-block F2L-1) exactly via symmetry-reduced move/pruning
//! tables and IDA*, then chains those per-block solvers into multi-step
//! skeletons with a breadth-bounded search.

#[macro_use]
extern crate lazy_static;

/// The crate-wide error type.
pub mod error;

/// Cube state at the cubie level: permutation/orientation arrays, the 18
/// half-turn moves as elementary transformations, and cube inversion.
pub mod cubie;

/// The `Move` enum, its face/layer/inverse relations and the canonical
/// face-successor order used to prune duplicate move sequences.
pub mod moves;

/// Coordinate encodings: Lehmer-code permutation indices, combinatorial
/// layout indices, and base-3/base-2 orientation indices, with inverses.
pub mod coordinate;

/// The 48-element cube symmetry group: symmetry indices, cube/move
/// conjugation, and per-generator move-conjugation tables.
pub mod symmetry;

/// Named blocks (subsets of corners/edges), their coordinate encoding as a
/// [`block::CoordinateBlockCube`], and the symmetry-reduced
/// [`block::MultiBlockCube`].
pub mod block;

/// Dense (coordinate, move) -> coordinate tables, one per block.
pub mod movetable;

/// Exact god's-number pruning tables, one per block.
pub mod pruningtable;

/// The generic search-tree node shared by block-level IDA* and step-level
/// skeletons: parent back-links, path reconstruction, skeleton comments.
pub mod node;

/// The `SearchProblem` trait and the IDA*-with-slackness search it drives.
pub mod search;

/// Binds a block's move table, pruning table and rotations into a
/// `solve(root, max_depth, slackness)` step, for both single blocks and
/// split (coupled-block) steps.
pub mod step;

/// The worked blocks and steps used as this crate's reference method: a DLB
/// 2x2x2, a DL 2x2x3, and F2L-1 as a pair of coupled 2x2x3s.
pub mod blocks;

/// Chains an ordered list of steps into multi-step skeletons with a
/// breadth-bounded beam search.
pub mod multistep;

/// Process-wide, independently lazy accessors for the worked steps, for
/// callers who don't need explicit control over table construction.
pub mod session;

pub use cubie::CubieCube;
pub use error::{Error, Result};
pub use moves::Move;
