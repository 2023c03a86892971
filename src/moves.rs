use std::fmt;
use std::rc::Rc;

use crate::node::Node;

/// A blank move, named after the apparent motion of the tile that slides
/// into the blank. `Up` swaps the blank with the cell below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Generation order: vertical before horizontal.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// `(row, col)` offset from the blank to the cell it swaps with.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (1, 0),
            Move::Down => (-1, 0),
            Move::Left => (0, 1),
            Move::Right => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }

    /// Last-resort A* tie-break among siblings; higher is preferred.
    pub fn rank(&self) -> u8 {
        match self {
            Move::Up => 4,
            Move::Down => 3,
            Move::Left => 2,
            Move::Right => 1,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Renders a move sequence as its letters, e.g. `"ULLD"`.
pub fn to_letters(path: &[Move]) -> String {
    path.iter().map(Move::letter).collect()
}

/// Successor generation for the sliding-tile puzzle.
///
/// Stateless: every call derives the blank position from the node it is
/// given, so one generator can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Every successor of `node`, one per legal move, all stamped with `order`.
    pub fn expand(&self, node: &Rc<Node>, order: u64) -> Vec<Rc<Node>> {
        Move::ALL
            .iter()
            .filter_map(|&m| {
                node.board()
                    .moved(m)
                    .map(|board| Rc::new(Node::child(node, board, m, order)))
            })
            .collect()
    }
}
