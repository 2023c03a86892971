use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::rc::Rc;

use log::{debug, trace};

use super::{Algorithm, OrderCounter, SearchStrategy};
use crate::moves::MoveGenerator;
use crate::node::Node;
use crate::puzzle::Puzzle;

/// Frontier ordering key for A*.
///
/// Lower `f_cost` first, then older `order`, then higher move rank.
/// The root carries rank 0 but is the only node with order 0, so the rank
/// tier never compares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f_cost: usize,
    pub order: u64,
    pub rank: u8,
}

impl FrontierKey {
    /// `f = depth + manhattan distance`.
    pub fn for_node(node: &Node) -> Self {
        Self {
            f_cost: node.depth() + node.board().manhattan_distance(),
            order: node.order(),
            rank: node.movement().map_or(0, |m| m.rank()),
        }
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            .then(self.order.cmp(&other.order))
            .then(other.rank.cmp(&self.rank))
    }
}

/// `BinaryHeap` is a max-heap; `Reverse` makes the smallest key pop first.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: Rc<Node>,
}

impl FrontierEntry {
    fn new(node: Rc<Node>) -> Self {
        Self {
            key: Reverse(FrontierKey::for_node(&node)),
            node,
        }
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// A* tree search with the Manhattan-distance heuristic.
///
/// The heuristic is admissible and consistent, so the first goal popped is
/// optimal even though boards are never deduplicated. `cost` is the goal's
/// depth.
#[derive(Debug, Default)]
pub struct AStar {
    developed: usize,
    goal_depth: usize,
}

impl AStar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SearchStrategy for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn search(
        &mut self,
        initial: Rc<Node>,
        goal: &Puzzle,
        generator: &MoveGenerator,
    ) -> Option<Rc<Node>> {
        let mut orders = OrderCounter::default();
        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry::new(initial));
        self.developed = 0;

        while let Some(FrontierEntry { key, node: current }) = frontier.pop() {
            self.developed += 1;
            trace!(
                "a* develops f={} depth {} order {}",
                key.0.f_cost,
                current.depth(),
                current.order()
            );

            if current.board() == goal {
                self.goal_depth = current.depth();
                debug!(
                    "a* reached goal at depth {} after {} developed nodes",
                    self.goal_depth, self.developed
                );
                return Some(current);
            }

            let stamp = orders.next();
            frontier.extend(
                generator
                    .expand(&current, stamp)
                    .into_iter()
                    .map(FrontierEntry::new),
            );
        }

        debug!("a* exhausted frontier after {} developed nodes", self.developed);
        None
    }

    fn developed_nodes(&self) -> usize {
        self.developed
    }

    fn cost(&self) -> usize {
        self.goal_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::search::solution_path;

    fn key(f_cost: usize, order: u64, rank: u8) -> FrontierKey {
        FrontierKey {
            f_cost,
            order,
            rank,
        }
    }

    #[test]
    fn lower_f_cost_wins() {
        assert!(key(3, 9, 1) < key(4, 1, 4));
    }

    #[test]
    fn older_order_wins_on_f_tie() {
        assert!(key(5, 2, 1) < key(5, 3, 4));
    }

    #[test]
    fn higher_rank_wins_within_a_batch() {
        let up = key(5, 2, Move::Up.rank());
        let down = key(5, 2, Move::Down.rank());
        let left = key(5, 2, Move::Left.rank());
        let right = key(5, 2, Move::Right.rank());
        assert!(up < down && down < left && left < right);
    }

    #[test]
    fn heap_pops_in_key_order() {
        let root = Rc::new(Node::root(Puzzle::from_tiles(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8])));
        let mut heap: BinaryHeap<FrontierEntry> = MoveGenerator::new()
            .expand(&root, 1)
            .into_iter()
            .map(FrontierEntry::new)
            .collect();

        let mut popped = Vec::new();
        while let Some(entry) = heap.pop() {
            popped.push(entry.key.0);
        }
        assert!(popped.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn goal_as_initial() {
        let mut astar = AStar::new();
        let found = astar
            .search(
                Rc::new(Node::root(Puzzle::new(3))),
                &Puzzle::new(3),
                &MoveGenerator::new(),
            )
            .unwrap();
        assert!(solution_path(&found).is_empty());
        assert_eq!(astar.developed_nodes(), 1);
        assert_eq!(astar.cost(), 0);
    }

    #[test]
    fn one_move_away_develops_two_nodes() {
        let mut astar = AStar::new();
        let initial = Puzzle::from_tiles(3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let found = astar
            .search(
                Rc::new(Node::root(initial)),
                &Puzzle::new(3),
                &MoveGenerator::new(),
            )
            .unwrap();
        assert_eq!(solution_path(&found), vec![Move::Left]);
        assert_eq!(astar.developed_nodes(), 2);
        assert_eq!(astar.cost(), 1);
    }

    #[test]
    fn cost_is_optimal_depth() {
        let mut astar = AStar::new();
        // Needs at least the manhattan distance, here 6 moves
        let initial = Puzzle::from_tiles(3, &[4, 1, 3, 7, 2, 6, 0, 5, 8]);
        assert_eq!(initial.manhattan_distance(), 6);
        let found = astar
            .search(
                Rc::new(Node::root(initial)),
                &Puzzle::new(3),
                &MoveGenerator::new(),
            )
            .unwrap();
        assert_eq!(astar.cost(), 6);
        assert_eq!(solution_path(&found).len(), 6);
    }
}
