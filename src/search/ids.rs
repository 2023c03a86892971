use std::rc::Rc;

use log::{debug, trace};

use super::{Algorithm, OrderCounter, SearchStrategy};
use crate::moves::MoveGenerator;
use crate::node::Node;
use crate::puzzle::Puzzle;

/// Iterative-deepening depth-first tree search.
///
/// Runs a depth-limited search with limit 0, 1, 2, ... until one succeeds.
/// `developed_nodes` only covers the final iteration, and `cost` is the
/// limit that iteration ran with, which equals the solution length.
///
/// Without a `max_depth` the search never returns on an unsolvable board.
#[derive(Debug, Default)]
pub struct Ids {
    developed: usize,
    depth_limit: usize,
    max_depth: Option<usize>,
}

impl Ids {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gives up once the depth limit would exceed `max_depth`.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::default()
        }
    }

    /// One depth-first pass that develops nodes no deeper than `limit`.
    ///
    /// Deeper nodes are popped and discarded without being counted.
    pub fn limited_search(
        &mut self,
        initial: &Rc<Node>,
        goal: &Puzzle,
        generator: &MoveGenerator,
        limit: usize,
    ) -> Option<Rc<Node>> {
        let mut orders = OrderCounter::default();
        let mut frontier = vec![Rc::clone(initial)];

        while let Some(current) = frontier.pop() {
            if current.depth() > limit {
                continue;
            }

            self.developed += 1;
            trace!("ids develops depth {} under limit {}", current.depth(), limit);

            if current.board() == goal {
                return Some(current);
            }

            // Reversed so the first generated successor is popped first
            let successors = generator.expand(&current, orders.next());
            frontier.extend(successors.into_iter().rev());
        }

        None
    }
}

impl SearchStrategy for Ids {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ids
    }

    fn search(
        &mut self,
        initial: Rc<Node>,
        goal: &Puzzle,
        generator: &MoveGenerator,
    ) -> Option<Rc<Node>> {
        let mut limit = 0;

        loop {
            if self.max_depth.is_some_and(|max| limit > max) {
                debug!("ids gave up: depth limit {} exceeds maximum", limit);
                return None;
            }

            self.depth_limit = limit;
            self.developed = 0;

            if let Some(found) = self.limited_search(&initial, goal, generator, limit) {
                debug!(
                    "ids reached goal at limit {} with {} developed nodes",
                    limit, self.developed
                );
                return Some(found);
            }

            debug!(
                "ids limit {} exhausted after {} developed nodes",
                limit, self.developed
            );
            limit += 1;
        }
    }

    fn developed_nodes(&self) -> usize {
        self.developed
    }

    fn cost(&self) -> usize {
        self.depth_limit
    }
}
