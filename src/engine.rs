//! Runs a strategy against a board and packages the outcome.

use std::rc::Rc;

use log::{debug, info};

use crate::error::SolveError;
use crate::moves::{to_letters, Move, MoveGenerator};
use crate::node::Node;
use crate::puzzle::Puzzle;
use crate::search::{solution_path, Algorithm, SearchStrategy};

/// The outcome of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub algorithm: Algorithm,
    pub path: Vec<Move>,
    pub developed_nodes: usize,
    /// Strategy-specific: 0 for BFS, the final depth limit for IDS, the goal
    /// depth for A*.
    pub cost: usize,
}

impl Solution {
    /// `"<letters> <developed> <cost>"`, the problem-file output line.
    pub fn render(&self) -> String {
        format!(
            "{} {} {}",
            to_letters(&self.path),
            self.developed_nodes,
            self.cost
        )
    }
}

/// Owns an initial board and its canonical goal, and hands them to a strategy.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    initial: Puzzle,
    goal: Puzzle,
    max_depth: Option<usize>,
}

impl SearchEngine {
    pub fn new(initial: Puzzle) -> Self {
        let goal = Puzzle::new(initial.size());
        Self {
            initial,
            goal,
            max_depth: None,
        }
    }

    /// Caps IDS at this depth limit. Other strategies ignore it.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn goal(&self) -> &Puzzle {
        &self.goal
    }

    pub fn solve(&self, algorithm: Algorithm) -> Result<Solution, SolveError> {
        let mut strategy = algorithm.strategy(self.max_depth);
        self.solve_with(strategy.as_mut())
    }

    /// Runs `strategy` from a fresh root node.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::NoSolution`] when the strategy gives up.
    pub fn solve_with(&self, strategy: &mut dyn SearchStrategy) -> Result<Solution, SolveError> {
        let algorithm = strategy.algorithm();
        let root = Rc::new(Node::root(self.initial.clone()));
        info!(
            "solving {}x{} board with {}",
            self.initial.size(),
            self.initial.size(),
            algorithm
        );

        let found = strategy.search(root, &self.goal, &MoveGenerator::new());
        let developed = strategy.developed_nodes();

        match found {
            Some(goal) => {
                let path = solution_path(&goal);
                debug!("{} path {}", algorithm, to_letters(&path));
                Ok(Solution {
                    algorithm,
                    path,
                    developed_nodes: developed,
                    cost: strategy.cost(),
                })
            }
            None => Err(SolveError::NoSolution {
                algorithm,
                developed,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_is_canonical_for_the_initial_size() {
        let engine = SearchEngine::new(Puzzle::from_tiles(2, &[0, 1, 3, 2]));
        assert_eq!(engine.goal(), &Puzzle::new(2));
    }

    #[test]
    fn render_matches_output_line_format() {
        let solution = Solution {
            algorithm: Algorithm::AStar,
            path: vec![Move::Up, Move::Left],
            developed_nodes: 7,
            cost: 2,
        };
        assert_eq!(solution.render(), "UL 7 2");

        let empty = Solution {
            path: Vec::new(),
            developed_nodes: 1,
            cost: 0,
            ..solution
        };
        assert_eq!(empty.render(), " 1 0");
    }

    #[test]
    fn cost_semantics_differ_per_algorithm() {
        let engine = SearchEngine::new(Puzzle::from_tiles(3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]));

        let bfs = engine.solve(Algorithm::Bfs).unwrap();
        let ids = engine.solve(Algorithm::Ids).unwrap();
        let astar = engine.solve(Algorithm::AStar).unwrap();

        assert_eq!(bfs.cost, 0);
        assert_eq!(ids.cost, 1);
        assert_eq!(astar.cost, 1);
        for solution in [&bfs, &ids, &astar] {
            assert_eq!(solution.path, vec![Move::Left]);
            assert!(solution.developed_nodes <= 3);
        }
    }

    #[test]
    fn bounded_ids_reports_no_solution() {
        let engine = SearchEngine::new(Puzzle::from_tiles(3, &[2, 1, 3, 4, 5, 6, 7, 8, 0]))
            .with_max_depth(Some(4));
        let err = engine.solve(Algorithm::Ids).unwrap_err();
        assert!(matches!(
            err,
            SolveError::NoSolution {
                algorithm: Algorithm::Ids,
                ..
            }
        ));
    }
}
