//! Search strategies over the sliding-tile state space.
//!
//! All three strategies are tree searches: no visited set is kept, so a
//! board may be generated and developed many times. They share the
//! [`SearchStrategy`] contract and the [`solution_path`] reconstruction.

mod astar;
mod bfs;
mod ids;

pub use astar::AStar;
pub use bfs::Bfs;
pub use ids::Ids;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::ParseError;
use crate::moves::{Move, MoveGenerator};
use crate::node::Node;
use crate::puzzle::Puzzle;

/// A search strategy.
///
/// `search` runs to completion on the calling thread. `developed_nodes`
/// counts nodes taken off the frontier and tested against the goal, never
/// nodes that were merely generated. The meaning of `cost` differs per
/// strategy and is documented on each implementation.
pub trait SearchStrategy {
    fn algorithm(&self) -> Algorithm;

    /// Searches from `initial` for a node whose board equals `goal`.
    /// Returns `None` when the frontier is exhausted.
    fn search(
        &mut self,
        initial: Rc<Node>,
        goal: &Puzzle,
        generator: &MoveGenerator,
    ) -> Option<Rc<Node>>;

    fn developed_nodes(&self) -> usize;

    fn cost(&self) -> usize;
}

/// The moves leading from the root of `goal`'s tree to `goal`.
///
/// Empty when `goal` is itself the root.
pub fn solution_path(goal: &Node) -> Vec<Move> {
    let mut path: Vec<Move> = goal.ancestors().filter_map(Node::movement).collect();
    path.reverse();
    path
}

/// Deterministic stamp source for expansion batches.
///
/// Stamps start at 1 so that every generated node sorts after the root.
#[derive(Debug, Default)]
pub(crate) struct OrderCounter {
    last: u64,
}

impl OrderCounter {
    pub(crate) fn next(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

/// The available strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bfs,
    Ids,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Ids, Algorithm::AStar];

    /// Numeric code used by problem files: 1 = IDS, 2 = BFS, 3 = A*.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Algorithm::Ids),
            2 => Some(Algorithm::Bfs),
            3 => Some(Algorithm::AStar),
            _ => None,
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Algorithm::Ids => 1,
            Algorithm::Bfs => 2,
            Algorithm::AStar => 3,
        }
    }

    /// A fresh strategy instance. `max_depth` only affects IDS.
    pub fn strategy(&self, max_depth: Option<usize>) -> Box<dyn SearchStrategy> {
        match self {
            Algorithm::Bfs => Box::new(Bfs::new()),
            Algorithm::Ids => match max_depth {
                Some(limit) => Box::new(Ids::with_max_depth(limit)),
                None => Box::new(Ids::new()),
            },
            Algorithm::AStar => Box::new(AStar::new()),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Ids => "IDS",
            Algorithm::AStar => "A*",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Algorithm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "ids" => Ok(Algorithm::Ids),
            "astar" | "a*" => Ok(Algorithm::AStar),
            _ => s
                .parse::<u32>()
                .ok()
                .and_then(Algorithm::from_code)
                .ok_or_else(|| ParseError::Algorithm(s.to_string())),
        }
    }
}
