//! Iterative-deepening A* (§4.5): depth-first expansion pruned by
//! `depth + estimate(state) <= bound`, with the cost bound raised one move
//! at a time until a solution appears, then continued through `slackness`
//! additional bounds so near-optimal alternatives are also collected.

use std::rc::Rc;

use crate::moves::Move;
use crate::node::Node;

/// Everything IDA* needs to search over a state type `S`, gathered into one
/// trait so `search`/`Step::solve` take a single bound instead of four
/// separate closures.
pub trait SearchProblem {
    type State: Clone;

    fn apply(&self, m: Move, state: &mut Self::State);
    fn estimate(&self, state: &Self::State) -> u32;
    fn is_solved(&self, state: &Self::State) -> bool;

    /// Moves legal immediately after `last` (`None` at the root). Defaults
    /// to the canonical face-successor relation; a step may override this
    /// if it needs a different restriction, but must not drop the relation
    /// entirely or pruning admissibility breaks (§9).
    fn directions(&self, last: Option<Move>) -> &'static [Move] {
        crate::moves::allowed_next(last)
    }
}

/// Runs IDA* from `root`, per §4.5: the cost bound rises `0, 1, 2, ...,
/// max_depth`; once a bound first yields a solution, search continues
/// through that bound plus `slackness` (inclusive) and then stops.
pub fn search<P: SearchProblem>(
    problem: &P,
    root: Rc<Node<P::State>>,
    max_depth: u32,
    slackness: u32,
) -> Vec<Rc<Node<P::State>>> {
    let mut solutions = Vec::new();
    let mut solved_at: Option<u32> = None;

    let mut bound = 0u32;
    while bound <= max_depth {
        let mut found_this_bound = Vec::new();
        dfs(problem, &root, bound, &mut found_this_bound);
        solutions.append(&mut found_this_bound);

        if solved_at.is_none() && !solutions.is_empty() {
            solved_at = Some(bound);
        }
        if let Some(first) = solved_at {
            if bound >= first + slackness {
                break;
            }
        }
        bound += 1;
    }

    solutions
}

fn dfs<P: SearchProblem>(
    problem: &P,
    node: &Rc<Node<P::State>>,
    bound: u32,
    out: &mut Vec<Rc<Node<P::State>>>,
) {
    if problem.is_solved(&node.state) {
        out.push(Rc::clone(node));
        return;
    }
    if node.depth + problem.estimate(&node.state) > bound {
        return;
    }

    let last = node.last_moves.last().copied();
    let directions = problem.directions(last);
    let apply = |m: Move, s: &mut P::State| problem.apply(m, s);
    for child in node.expand(apply, directions) {
        dfs(problem, &child, bound, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::ALL_MOVES;

    /// A trivial problem: state is a signed displacement from 0, each move
    /// shifts it by a fixed per-move amount; solved at 0. Used to check the
    /// bound-raising/slackness machinery without any cube machinery.
    struct Line;

    impl SearchProblem for Line {
        type State = i32;

        fn apply(&self, m: Move, state: &mut i32) {
            *state += match m {
                Move::U => 1,
                Move::U3 => -1,
                _ => 0,
            };
        }
        fn estimate(&self, state: &i32) -> u32 {
            state.unsigned_abs()
        }
        fn is_solved(&self, state: &i32) -> bool {
            *state == 0
        }
        fn directions(&self, _last: Option<Move>) -> &'static [Move] {
            &ALL_MOVES
        }
    }

    #[test]
    fn finds_optimal_depth_for_trivial_problem() {
        let root = Node::root(3);
        let solutions = search(&Line, root, 10, 0);
        assert!(!solutions.is_empty());
        assert!(solutions.iter().all(|n| n.depth == 3));
    }

    #[test]
    fn empty_scramble_solves_at_depth_zero() {
        let root = Node::root(0);
        let solutions = search(&Line, root, 10, 0);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].depth, 0);
    }

    #[test]
    fn slackness_collects_solutions_up_to_bound_plus_slack() {
        let root = Node::root(2);
        let solutions = search(&Line, root, 10, 2);
        let depths: std::collections::HashSet<u32> =
            solutions.iter().map(|n| n.depth).collect();
        assert!(depths.contains(&2));
        assert!(depths.iter().all(|&d| d <= 4));
    }

    #[test]
    fn unreachable_within_max_depth_returns_empty() {
        let root = Node::root(100);
        let solutions = search(&Line, root, 3, 0);
        assert!(solutions.is_empty());
    }
}
