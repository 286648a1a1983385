//! The clue ledger: a binary search tree of collected clues
//!
//! Keyed by clue text in byte-wise lexicographic order. Duplicates are
//! ignored, so every clue appears once no matter how often it is offered.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A node of the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueNode {
    pub clue: String,
    pub left: Option<Box<ClueNode>>,
    pub right: Option<Box<ClueNode>>,
}

impl ClueNode {
    pub fn new(clue: &str) -> Self {
        Self {
            clue: clue.to_string(),
            left: None,
            right: None,
        }
    }
}

/// Insert `clue` below `node` and hand back the subtree root.
///
/// The caller must store the returned value: inserting into an empty
/// subtree creates the node that the parent then links in. Equal text is a
/// no-op.
pub fn insert(node: Option<Box<ClueNode>>, clue: &str) -> Option<Box<ClueNode>> {
    match node {
        None => Some(Box::new(ClueNode::new(clue))),
        Some(mut node) => {
            match clue.cmp(node.clue.as_str()) {
                Ordering::Less => node.left = insert(node.left.take(), clue),
                Ordering::Greater => node.right = insert(node.right.take(), clue),
                Ordering::Equal => {}
            }
            Some(node)
        }
    }
}

fn contains(node: Option<&ClueNode>, clue: &str) -> bool {
    match node {
        None => false,
        Some(node) => match clue.cmp(node.clue.as_str()) {
            Ordering::Less => contains(node.left.as_deref(), clue),
            Ordering::Greater => contains(node.right.as_deref(), clue),
            Ordering::Equal => true,
        },
    }
}

fn release_node(node: Option<Box<ClueNode>>) -> usize {
    match node {
        None => 0,
        Some(mut node) => {
            let released = release_node(node.left.take()) + release_node(node.right.take());
            drop(node);
            released + 1
        }
    }
}

/// Lazy in-order walk over a ledger subtree.
///
/// Holds only shared borrows; the tree cannot change while it is alive, and
/// a fresh walk can be started at any time.
pub struct InOrder<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> InOrder<'a> {
    pub fn new(root: Option<&'a ClueNode>) -> Self {
        let mut walk = Self { stack: Vec::new() };
        walk.push_left_spine(root);
        walk
    }

    fn push_left_spine(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(node.clue.as_str())
    }
}

/// Every clue collected during a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueLedger {
    root: Option<Box<ClueNode>>,
    len: usize,
}

impl ClueLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clue. Returns `false` when it was already in the ledger.
    pub fn insert(&mut self, clue: &str) -> bool {
        if contains(self.root.as_deref(), clue) {
            return false;
        }
        self.root = insert(self.root.take(), clue);
        self.len += 1;
        true
    }

    pub fn contains(&self, clue: &str) -> bool {
        contains(self.root.as_deref(), clue)
    }

    pub fn root(&self) -> Option<&ClueNode> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clues in ascending order
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Tear the tree down post-order, returning how many nodes were released.
    pub fn release(self) -> usize {
        release_node(self.root)
    }
}

impl<'a> IntoIterator for &'a ClueLedger {
    type Item = &'a str;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
