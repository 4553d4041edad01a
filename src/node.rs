//! The search tree (§3 "Search node", §9): reference-counted, immutable
//! nodes with a back-link to their parent. A path from root to any live node
//! can always be walked without cloning the tree.

use std::rc::Rc;

use crate::moves::Move;

/// A node in a search tree over states of type `S` (a `CoordinateBlockCube`,
/// a `MultiBlockCube`, or a full `CubieCube` for the multi-step driver).
pub struct Node<S> {
    pub state: S,
    pub parent: Option<Rc<Node<S>>>,
    pub depth: u32,
    pub last_moves: Vec<Move>,
    pub step_number: usize,
}

impl<S> Node<S> {
    pub fn root(state: S) -> Rc<Self> {
        Rc::new(Self {
            state,
            parent: None,
            depth: 0,
            last_moves: Vec::new(),
            step_number: 0,
        })
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Builds one child per direction, applying `apply` to a copy of
    /// `self.state`.
    pub fn expand<F>(self: &Rc<Self>, apply: F, directions: &[Move]) -> Vec<Rc<Self>>
    where
        S: Clone,
        F: Fn(Move, &mut S),
    {
        directions
            .iter()
            .map(|&m| {
                let mut next = self.state.clone();
                apply(m, &mut next);
                Rc::new(Self {
                    state: next,
                    parent: Some(Rc::clone(self)),
                    depth: self.depth + 1,
                    last_moves: vec![m],
                    step_number: self.step_number,
                })
            })
            .collect()
    }

    /// The full move sequence from the root to this node.
    pub fn get_path(&self) -> Vec<Move> {
        let mut path = Vec::new();
        let mut stack = Vec::new();
        let mut cur: Option<&Node<S>> = Some(self);
        while let Some(n) = cur {
            stack.push(&n.last_moves);
            cur = n.parent.as_deref();
        }
        for moves in stack.into_iter().rev() {
            path.extend_from_slice(moves);
        }
        path
    }

    /// Walks parent links, grouping consecutive moves made within the same
    /// `step_number` into one `(move_sequence, comment)` entry per step,
    /// oldest step first.
    pub fn get_skeleton(&self, comments: &[String]) -> Vec<(Vec<Move>, String)> {
        let mut per_step: Vec<(usize, Vec<Move>)> = Vec::new();
        let mut cur_step = self.step_number;
        let mut step_path: Vec<Move> = Vec::new();

        let mut cur: Option<&Node<S>> = Some(self);
        while let Some(n) = cur {
            match &n.parent {
                None => {
                    let mut prefixed = n.last_moves.clone();
                    prefixed.extend(step_path.iter().cloned());
                    per_step.push((cur_step, prefixed));
                    break;
                }
                Some(p) => {
                    if p.step_number == cur_step {
                        let mut prefixed = n.last_moves.clone();
                        prefixed.extend(step_path.iter().cloned());
                        step_path = prefixed;
                    } else {
                        per_step.push((cur_step, step_path));
                        cur_step = p.step_number;
                        step_path = n.last_moves.clone();
                    }
                    cur = Some(p.as_ref());
                }
            }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;

    #[test]
    fn root_has_empty_path() {
        let root = Node::root(0u32);
        assert!(root.get_path().is_empty());
        assert!(root.is_root());
    }

    #[test]
    fn path_accumulates_across_generations() {
        let root = Node::root(0i32);
        let apply = |m: Move, s: &mut i32| *s += m as i32 + 1;

        let gen1 = root.expand(apply, &[Move::U, Move::R]);
        let child = &gen1[1]; // took R
        let gen2 = child.expand(apply, &[Move::F]);
        let grandchild = &gen2[0];

        assert_eq!(grandchild.get_path(), vec![Move::R, Move::F]);
        assert_eq!(grandchild.depth, 2);
    }

    #[test]
    fn skeleton_groups_by_step_number() {
        let root = Node::root(0u32);
        let apply = |_: Move, s: &mut u32| *s += 1;
        let step0_children = root.expand(apply, &[Move::U]);
        let mut step1_child = Rc::try_unwrap(Rc::clone(&step0_children[0])).unwrap_or_else(|rc| {
            Node {
                state: rc.state,
                parent: rc.parent.clone(),
                depth: rc.depth,
                last_moves: rc.last_moves.clone(),
                step_number: rc.step_number,
            }
        });
        step1_child.step_number = 1;
        let step1_child = Rc::new(step1_child);
        let leaves = step1_child.expand(apply, &[Move::F, Move::B]);

        let comments = vec!["first".to_string(), "second".to_string()];
        let skeleton = leaves[0].get_skeleton(&comments);
        assert_eq!(skeleton.len(), 2);
        assert_eq!(skeleton[0].0, vec![Move::U]);
        assert_eq!(skeleton[0].1, "first");
        assert_eq!(skeleton[1].0, vec![Move::F]);
        assert_eq!(skeleton[1].1, "second");
    }
}
