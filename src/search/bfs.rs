use std::collections::VecDeque;
use std::rc::Rc;

use log::{debug, trace};

use super::{Algorithm, OrderCounter, SearchStrategy};
use crate::moves::MoveGenerator;
use crate::node::Node;
use crate::puzzle::Puzzle;

/// Breadth-first tree search with a FIFO frontier.
///
/// Finds a shortest solution. `cost` is always 0; use the solution path's
/// length for the number of moves.
#[derive(Debug, Default)]
pub struct Bfs {
    developed: usize,
}

impl Bfs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchStrategy for Bfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn search(
        &mut self,
        initial: Rc<Node>,
        goal: &Puzzle,
        generator: &MoveGenerator,
    ) -> Option<Rc<Node>> {
        let mut orders = OrderCounter::default();
        let mut frontier = VecDeque::new();
        frontier.push_back(initial);
        self.developed = 0;

        while let Some(current) = frontier.pop_front() {
            self.developed += 1;
            trace!("bfs develops depth {}", current.depth());

            if current.board() == goal {
                debug!(
                    "bfs reached goal at depth {} after {} developed nodes",
                    current.depth(),
                    self.developed
                );
                return Some(current);
            }

            frontier.extend(generator.expand(&current, orders.next()));
        }

        debug!("bfs exhausted frontier after {} developed nodes", self.developed);
        None
    }

    fn developed_nodes(&self) -> usize {
        self.developed
    }

    fn cost(&self) -> usize {
        0
    }
}
