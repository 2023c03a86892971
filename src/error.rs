//! Error types.
//!
//! The search core itself never fails on input: it trusts its board. These
//! errors belong to the layers around it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::search::Algorithm;

/// Rejection of a malformed problem description.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing {0} line")]
    MissingLine(&'static str),

    #[error("unknown algorithm `{0}` (expected 1 = IDS, 2 = BFS, 3 = A*)")]
    Algorithm(String),

    #[error("invalid board size `{0}`")]
    Size(String),

    #[error("expected {expected} tiles for a {size}x{size} board, found {found}")]
    TileCount {
        size: usize,
        expected: usize,
        found: usize,
    },

    #[error("tile `{0}` is not a number")]
    Tile(String),

    #[error("tile {tile} is outside 0..{limit}")]
    TileRange { tile: u32, limit: usize },

    #[error("tile {0} appears more than once")]
    DuplicateTile(u32),
}

/// Failure of a search run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("{algorithm} found no solution after developing {developed} nodes")]
    NoSolution { algorithm: Algorithm, developed: usize },
}

/// Bad command-line arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),

    #[error("`{0}` expects a value")]
    MissingValue(String),

    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: String, value: String },

    #[error(transparent)]
    Algorithm(#[from] ParseError),
}

/// Anything that can go wrong while running a problem file end to end.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}
