//! The multi-step driver (§4.7): expands a scramble through a fixed sequence
//! of steps, carrying at most `breadth` candidate skeletons forward from one
//! step to the next. Grounded in `original_source/src/multistep.hpp` and
//! `script/multistep.hpp`'s `StepNode`/`make_stepper` machinery, generalized
//! from compile-time template composition to a runtime list of
//! [`crate::step::ErasedStep`] trait objects (§9 design note).

use std::rc::Rc;

use crate::cubie::{CubieCube, ELEMENTARY_TRANSFORMATIONS};
use crate::moves::Move;
use crate::step::ErasedStep;

/// One node of a multi-step skeleton: the cube state reached so far, the
/// move sub-sequence that got here from the parent, and a back-link (§3
/// "Search node"). Unlike [`crate::node::Node`], a `StepNode`'s state is
/// always a full [`CubieCube`], and each node corresponds to exactly one
/// step's worth of moves rather than one HTM move.
pub struct StepNode {
    pub state: CubieCube,
    pub sub_moves: Vec<Move>,
    pub parent: Option<Rc<StepNode>>,
    pub depth: u32,
    pub step_number: usize,
    /// `true` if `sub_moves` was found by solving `parent.state.inverse()`
    /// and applied to *that* inverse cube rather than to `parent.state`
    /// directly (§4.7 "inverse expansion mode", §9 open question). Such a
    /// node's `state` is only guaranteed to be block-solved for the step
    /// that produced it; reconstructing a single playable algorithm across
    /// an inverted node is an outer-surface pretty-printing concern (§1)
    /// this crate does not attempt, so [`StepNode::get_skeleton`]'s output
    /// for an inverted segment is the literal sub-sequence that solved the
    /// inverse cube, not a move list valid against the forward scramble.
    pub inverted: bool,
}

impl StepNode {
    pub fn root(scramble: CubieCube) -> Rc<Self> {
        Rc::new(Self {
            state: scramble,
            sub_moves: Vec::new(),
            parent: None,
            depth: 0,
            step_number: 0,
            inverted: false,
        })
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The concatenation of every ancestor's sub-sequence, oldest first.
    /// Meaningful only when no ancestor has `inverted == true` (see
    /// [`StepNode::inverted`]).
    pub fn get_path(&self) -> Vec<Move> {
        let mut segments = Vec::new();
        let mut cur: Option<&StepNode> = Some(self);
        while let Some(n) = cur {
            if !n.sub_moves.is_empty() || !n.is_root() {
                segments.push(&n.sub_moves);
            }
            cur = n.parent.as_deref();
        }
        segments.reverse();
        segments.into_iter().flatten().copied().collect()
    }

    /// One `(move_sequence, comment)` pair per step, oldest first, pairing
    /// each step's sub-sequence with `comments[step_number]` (§4.7, §6).
    pub fn get_skeleton(&self, comments: &[String]) -> Vec<(Vec<Move>, String)> {
        let mut per_step = Vec::new();
        let mut cur: Option<&StepNode> = Some(self);
        while let Some(n) = cur {
            if !n.is_root() {
                per_step.push((n.step_number, n.sub_moves.clone()));
            }
            cur = n.parent.as_deref();
        }
        per_step.reverse();
        per_step
            .into_iter()
            .map(|(step, moves)| {
                let comment = comments.get(step).cloned().unwrap_or_default();
                (moves, comment)
            })
            .collect()
    }
}

fn apply_moves(cc: CubieCube, moves: &[Move]) -> CubieCube {
    let mut cc = cc;
    for &m in moves {
        cc.apply(&ELEMENTARY_TRANSFORMATIONS[m as usize]);
    }
    cc
}

/// Expands one step for one parent, producing one child per sub-solution
/// `Si.solve(Si.initialize(parent.state), budget - parent.depth, slackness)`
/// returns (§4.7 step 2), plus, if `allow_inverse`, one child per
/// sub-solution of the same step against `parent.state.inverse()` (§4.7
/// "inverse expansion mode").
fn expand_step(
    step: &dyn ErasedStep,
    parent: &Rc<StepNode>,
    budget: u32,
    slackness: u32,
    allow_inverse: bool,
    step_number: usize,
) -> Vec<Rc<StepNode>> {
    let mut children = Vec::new();
    if parent.depth > budget {
        return children;
    }
    let remaining = budget - parent.depth;

    for (seq, sub_depth) in step.solve_from_cubie(&parent.state, remaining, slackness) {
        let state = apply_moves(parent.state, &seq);
        children.push(Rc::new(StepNode {
            state,
            sub_moves: seq,
            parent: Some(Rc::clone(parent)),
            depth: parent.depth + sub_depth,
            step_number,
            inverted: false,
        }));
    }

    if allow_inverse {
        let inv_cc = parent.state.inverse();
        for (seq, sub_depth) in step.solve_from_cubie(&inv_cc, remaining, slackness) {
            let state = apply_moves(inv_cc, &seq);
            children.push(Rc::new(StepNode {
                state,
                sub_moves: seq,
                parent: Some(Rc::clone(parent)),
                depth: parent.depth + sub_depth,
                step_number,
                inverted: true,
            }));
        }
    }

    children
}

/// Beam-expands `scramble` through `steps` in order (§4.7): at each step,
/// every surviving parent (sorted by depth from the previous step) is
/// expanded, parents are processed in that order until the accumulated
/// child count would exceed `breadth`, and the survivors are re-sorted by
/// depth before moving to the next step. `inverse_expansion[i]` opts step
/// `i` into also searching the inverse cube (default `false` for indices
/// beyond the slice's length); `budget` bounds the *total* move count across
/// all steps, and `slackness` is passed through to every step's `solve`.
pub fn multi_step_solve(
    steps: &[&dyn ErasedStep],
    inverse_expansion: &[bool],
    scramble: &CubieCube,
    budget: u32,
    breadth: usize,
    slackness: u32,
) -> Vec<Rc<StepNode>> {
    let mut frontier = vec![StepNode::root(*scramble)];

    for (i, &step) in steps.iter().enumerate() {
        let allow_inverse = inverse_expansion.get(i).copied().unwrap_or(false);
        let mut children: Vec<Rc<StepNode>> = Vec::new();

        for parent in &frontier {
            let new_children = expand_step(step, parent, budget, slackness, allow_inverse, i);
            children.extend(new_children);
            if children.len() > breadth {
                break;
            }
        }

        children.sort_by_key(|n| n.depth);
        frontier = children;
        if frontier.is_empty() {
            break;
        }
    }

    frontier
}
