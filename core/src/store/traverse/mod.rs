//! Recursive descent over path segments.
//!
//! A walk is parameterized by what happens at each intermediate segment
//! ([`Branch`]) and what happens at the final one ([`Leaf`]). Reads go
//! through [`lookup`], which is the get-leaf walk over a shared borrow.

use crate::types::{Node, Segment, Tree};

/// Action applied to the final segment of a mutating walk.
#[derive(Debug)]
pub(crate) enum Leaf {
    /// Insert or overwrite, yielding the replaced node if any.
    Set(Node),
    /// Take the node out, failing if the key is absent.
    Remove,
}

/// Action applied to each intermediate segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch {
    /// Continue only into an existing branch.
    Check,
    /// Continue into the branch at the key, replacing anything else with an empty one.
    Create,
}

/// The segment at index `depth` did not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Missing {
    pub depth: usize,
}

pub(crate) fn lookup<'t>(tree: &'t Tree, segments: &[Segment]) -> Result<&'t Node, Missing> {
    lookup_from(tree, segments, 0)
}

fn lookup_from<'t>(
    tree: &'t Tree,
    segments: &[Segment],
    depth: usize,
) -> Result<&'t Node, Missing> {
    match segments {
        [] => Err(Missing { depth }),
        [key] => tree.get(key).ok_or(Missing { depth }),
        [key, rest @ ..] => match tree.get(key) {
            Some(Node::Branch(next)) => lookup_from(next, rest, depth + 1),
            _ => Err(Missing { depth }),
        },
    }
}

pub(crate) fn apply(
    tree: &mut Tree,
    segments: &[Segment],
    leaf: Leaf,
    branch: Branch,
) -> Result<Option<Node>, Missing> {
    apply_from(tree, segments, leaf, branch, 0)
}

fn apply_from(
    tree: &mut Tree,
    segments: &[Segment],
    leaf: Leaf,
    branch: Branch,
    depth: usize,
) -> Result<Option<Node>, Missing> {
    match segments {
        [] => Err(Missing { depth }),
        [key] => match leaf {
            Leaf::Set(value) => Ok(tree.insert(key.clone(), value)),
            Leaf::Remove => tree.remove(key).map(Some).ok_or(Missing { depth }),
        },
        [key, rest @ ..] => {
            let next = match branch {
                Branch::Check => match tree.get_mut(key) {
                    Some(Node::Branch(next)) => next,
                    _ => return Err(Missing { depth }),
                },
                Branch::Create => {
                    let slot = tree.slot_mut(key);
                    if !slot.is_branch() {
                        *slot = Node::Branch(Tree::new());
                    }
                    match slot {
                        Node::Branch(next) => next,
                        _ => return Err(Missing { depth }),
                    }
                }
            };
            apply_from(next, rest, leaf, branch, depth + 1)
        }
    }
}
