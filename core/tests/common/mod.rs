#![allow(dead_code)]

use proptree_core::{Node, Tree};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// `{"one": 1, "two": {"three": 3}, "four": {"five": {"six": 6}}}`
pub fn reference_tree() -> Tree {
    Tree::from([
        ("one", Node::from(1)),
        ("two", Node::from(Tree::from([("three", 3)]))),
        (
            "four",
            Node::from(Tree::from([("five", Tree::from([("six", 6)]))])),
        ),
    ])
}

pub fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
