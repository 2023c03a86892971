//! Search-tree nodes.

use std::rc::Rc;

use crate::moves::Move;
use crate::puzzle::Puzzle;

/// An immutable search-tree node.
///
/// Nodes share their parent through `Rc`, so the tree is only ever linked
/// child-to-parent and a returned goal keeps its whole path alive.
/// Two nodes are equal when their boards are equal.
#[derive(Debug)]
pub struct Node {
    board: Puzzle,
    parent: Option<Rc<Node>>,
    movement: Option<Move>,
    depth: usize,
    order: u64,
}

impl Node {
    /// A root node: no parent, no move, depth 0, order 0.
    pub fn root(board: Puzzle) -> Self {
        Self {
            board,
            parent: None,
            movement: None,
            depth: 0,
            order: 0,
        }
    }

    /// A successor of `parent` reached by `movement`.
    pub fn child(parent: &Rc<Node>, board: Puzzle, movement: Move, order: u64) -> Self {
        Self {
            board,
            parent: Some(Rc::clone(parent)),
            movement: Some(movement),
            depth: parent.depth + 1,
            order,
        }
    }

    pub fn board(&self) -> &Puzzle {
        &self.board
    }

    pub fn parent(&self) -> Option<&Rc<Node>> {
        self.parent.as_ref()
    }

    /// The move that produced this node; `None` for the root.
    pub fn movement(&self) -> Option<Move> {
        self.movement
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Expansion batch stamp, shared by siblings.
    pub fn order(&self) -> u64 {
        self.order
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Iterates from this node up to the root, inclusive.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors { next: Some(self) }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for Node {}

impl Drop for Node {
    // Unlink long parent chains iteratively instead of recursing once per level.
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(node) = parent {
            match Rc::try_unwrap(node) {
                Ok(mut owned) => parent = owned.parent.take(),
                Err(_) => break,
            }
        }
    }
}

pub struct Ancestors<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}
