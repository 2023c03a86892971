//! Sliding-tile puzzle solver.
//!
//! Breadth-first, iterative-deepening and A* tree search over N×N boards,
//! sharing one node model and one successor generator.

pub mod config;
pub mod engine;
pub mod error;
pub mod moves;
pub mod node;
pub mod problem;
pub mod puzzle;
pub mod search;

pub use engine::{SearchEngine, Solution};
pub use moves::{Move, MoveGenerator};
pub use node::Node;
pub use puzzle::Puzzle;
pub use search::{solution_path, Algorithm, SearchStrategy};
