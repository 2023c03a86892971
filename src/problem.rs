//! Problem files: parsing, validation and the one-line report.
//!
//! A problem file has three lines:
//!
//! ```text
//! 3              algorithm code: 1 = IDS, 2 = BFS, 3 = A*
//! 3              board size
//! 1-2-3-4-5-6-7-0-8
//! ```
//!
//! The report is `<moves> <developed nodes> <cost>`, e.g. `L 2 1`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{info, warn};

use crate::engine::{SearchEngine, Solution};
use crate::error::{HarnessError, ParseError};
use crate::puzzle::Puzzle;
use crate::search::Algorithm;

/// A validated problem description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub algorithm: Algorithm,
    pub size: usize,
    /// Row-major, a permutation of `0..size * size`.
    pub tiles: Vec<u32>,
}

impl Problem {
    pub fn board(&self) -> Puzzle {
        Puzzle::from_tiles(self.size, &self.tiles)
    }
}

impl FromStr for Problem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().map(str::trim).filter(|l| !l.is_empty());

        let code_line = lines.next().ok_or(ParseError::MissingLine("algorithm"))?;
        let algorithm = code_line
            .parse::<u32>()
            .ok()
            .and_then(Algorithm::from_code)
            .ok_or_else(|| ParseError::Algorithm(code_line.to_string()))?;

        let size_line = lines.next().ok_or(ParseError::MissingLine("size"))?;
        let size = parse_size(size_line)?;

        let tiles_line = lines.next().ok_or(ParseError::MissingLine("tiles"))?;
        let tiles = parse_tiles(size, tiles_line)?;

        Ok(Self {
            algorithm,
            size,
            tiles,
        })
    }
}

/// Sizes whose tile count does not fit a `u32` tile value are rejected.
fn parse_size(line: &str) -> Result<usize, ParseError> {
    match line.parse::<usize>() {
        Ok(size) if size >= 2 && tile_count(size).is_some() => Ok(size),
        _ => Err(ParseError::Size(line.to_string())),
    }
}

fn tile_count(size: usize) -> Option<usize> {
    size.checked_mul(size).filter(|&count| u32::try_from(count).is_ok())
}

/// Parses `-`-separated tiles and checks they form a permutation of `0..size²`.
pub fn parse_tiles(size: usize, line: &str) -> Result<Vec<u32>, ParseError> {
    let expected = tile_count(size).ok_or_else(|| ParseError::Size(size.to_string()))?;
    let tokens: Vec<&str> = line.split('-').map(str::trim).collect();
    if tokens.len() != expected {
        return Err(ParseError::TileCount {
            size,
            expected,
            found: tokens.len(),
        });
    }

    let mut seen = HashSet::with_capacity(expected);
    let mut tiles = Vec::with_capacity(expected);
    for token in tokens {
        let tile: u32 = token
            .parse()
            .map_err(|_| ParseError::Tile(token.to_string()))?;
        if tile as usize >= expected {
            return Err(ParseError::TileRange {
                tile,
                limit: expected,
            });
        }
        if !seen.insert(tile) {
            return Err(ParseError::DuplicateTile(tile));
        }
        tiles.push(tile);
    }

    Ok(tiles)
}

pub fn read_problem(path: &Path) -> Result<Problem, HarnessError> {
    let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.parse()?)
}

pub fn write_report(path: &Path, solution: &Solution) -> Result<(), HarnessError> {
    fs::write(path, solution.render()).map_err(|source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads `input`, solves it with the algorithm it names and writes the
/// report to `output`.
///
/// An unsolvable board is only warned about: BFS and A* will exhaust memory
/// and IDS will not return unless `max_depth` is set.
pub fn solve_file(
    input: &Path,
    output: &Path,
    max_depth: Option<usize>,
) -> Result<Solution, HarnessError> {
    let problem = read_problem(input)?;
    info!(
        "{}: {}x{} board, {}",
        input.display(),
        problem.size,
        problem.size,
        problem.algorithm
    );

    let board = problem.board();
    if !board.is_solvable() {
        warn!("board in {} is not solvable", input.display());
    }

    let solution = SearchEngine::new(board)
        .with_max_depth(max_depth)
        .solve(problem.algorithm)?;
    write_report(output, &solution)?;
    info!("wrote `{}` to {}", solution.render(), output.display());

    Ok(solution)
}
