use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::moves::Move;

/// An N×N sliding-tile board. `0` marks the blank.
///
/// Equality looks at the tiles only; the cached blank position is
/// derived from them.
#[derive(Debug, Clone)]
pub struct Puzzle {
    size: usize,
    board: Vec<Vec<u32>>,
    blank_row: usize,
    blank_col: usize,
}

impl Puzzle {
    /// The canonical goal board: `1..N²-1` row-major, blank bottom-right.
    pub fn new(size: usize) -> Self {
        let mut board = Vec::with_capacity(size);
        let mut value = 1;

        for i in 0..size {
            let mut row = Vec::with_capacity(size);
            for j in 0..size {
                if i == size - 1 && j == size - 1 {
                    row.push(0);
                } else {
                    row.push(value);
                    value += 1;
                }
            }
            board.push(row);
        }

        Self {
            size,
            board,
            blank_row: size - 1,
            blank_col: size - 1,
        }
    }

    /// Builds a board from `size * size` row-major tiles.
    ///
    /// The tiles are trusted: callers must supply a permutation of
    /// `0..size * size`. Validation is the job of [`crate::problem`].
    pub fn from_tiles(size: usize, tiles: &[u32]) -> Self {
        let board: Vec<Vec<u32>> = tiles.chunks(size).map(|row| row.to_vec()).collect();
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or(0);

        Self {
            size,
            board,
            blank_row: blank / size,
            blank_col: blank % size,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.board[row][col]
    }

    /// `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank_row, self.blank_col)
    }

    /// Row-major copy of the tiles.
    pub fn tiles(&self) -> Vec<u32> {
        self.board.iter().flat_map(|row| row.iter().copied()).collect()
    }

    /// The cell that `movement` would swap with the blank, if it is on the board.
    pub fn neighbor(&self, movement: Move) -> Option<(usize, usize)> {
        let (dr, dc) = movement.as_offset();

        let row = self.blank_row as isize + dr;
        let col = self.blank_col as isize + dc;

        if row >= 0 && row < self.size as isize && col >= 0 && col < self.size as isize {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    pub fn can_move(&self, movement: Move) -> bool {
        self.neighbor(movement).is_some()
    }

    /// Swaps the blank with the neighbour named by `movement`.
    /// Returns `false` and leaves the board untouched when the move is illegal.
    pub fn apply_move(&mut self, movement: Move) -> bool {
        match self.neighbor(movement) {
            Some((row, col)) => {
                self.board[self.blank_row][self.blank_col] = self.board[row][col];
                self.board[row][col] = 0;

                self.blank_row = row;
                self.blank_col = col;
                true
            }
            None => false,
        }
    }

    /// A copy of this board with `movement` applied, or `None` if it is illegal.
    pub fn moved(&self, movement: Move) -> Option<Self> {
        let mut next = self.clone();
        if next.apply_move(movement) {
            Some(next)
        } else {
            None
        }
    }

    /// Replaces the tiles with a uniformly random solvable arrangement.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut flattened = self.tiles();

        loop {
            flattened.shuffle(rng);
            *self = Self::from_tiles(self.size, &flattened);

            if self.is_solvable() {
                break;
            }
        }
    }

    /// Walks the blank `steps` random legal moves, never undoing the
    /// previous move. Starting from the goal this yields a board whose
    /// optimal solution is at most `steps` long.
    pub fn scramble<R: Rng + ?Sized>(&mut self, rng: &mut R, steps: usize) {
        let mut last: Option<Move> = None;

        for _ in 0..steps {
            let options: Vec<Move> = Move::ALL
                .iter()
                .copied()
                .filter(|&m| self.can_move(m))
                .filter(|&m| last.map_or(true, |prev| m != prev.opposite()))
                .collect();

            if let Some(&choice) = options.choose(rng) {
                self.apply_move(choice);
                last = Some(choice);
            }
        }
    }

    /// Inversion-parity solvability test.
    pub fn is_solvable(&self) -> bool {
        let inversions = Self::count_inversions(&self.tiles());

        if self.size % 2 == 1 {
            // Odd width: solvable iff the inversion count is even
            inversions % 2 == 0
        } else {
            // Even width: solvable iff inversions + blank row (from the top) is odd
            (inversions + self.blank_row) % 2 == 1
        }
    }

    fn count_inversions(flattened: &[u32]) -> usize {
        flattened
            .iter()
            .enumerate()
            .filter(|&(_, &val)| val != 0)
            .map(|(i, &val)| {
                flattened[i + 1..]
                    .iter()
                    .filter(|&&next| next != 0 && next < val)
                    .count()
            })
            .sum()
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::new(self.size)
    }

    /// Sum over every non-blank tile of the Manhattan distance between its
    /// cell and its goal cell.
    pub fn manhattan_distance(&self) -> usize {
        let size = self.size as u32;
        let mut distance = 0;
        for (i, row) in self.board.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value != 0 {
                    let target_row = ((value - 1) / size) as usize;
                    let target_col = ((value - 1) % size) as usize;
                    distance += i.abs_diff(target_row) + j.abs_diff(target_col);
                }
            }
        }
        distance
    }
}

impl PartialEq for Puzzle {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.board == other.board
    }
}

impl Eq for Puzzle {}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size * self.size - 1).to_string().len();
        for row in &self.board {
            for &val in row {
                write!(f, "{:>width$} ", val, width = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn goal_board_is_row_major_with_trailing_blank() {
        let goal = Puzzle::new(3);
        assert_eq!(goal.tiles(), vec![1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(goal.blank(), (2, 2));
        assert!(goal.is_solved());
    }

    #[test]
    fn from_tiles_locates_blank() {
        let puzzle = Puzzle::from_tiles(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        assert_eq!(puzzle.blank(), (1, 1));
        assert_eq!(puzzle.tile(2, 0), 6);
    }

    #[test]
    fn moves_swap_blank_with_the_named_neighbour() {
        let center = Puzzle::from_tiles(3, &[1, 2, 3, 4, 0, 5, 6, 7, 8]);

        // Up pulls the tile below the blank upwards
        let up = center.moved(Move::Up).unwrap();
        assert_eq!(up.tiles(), vec![1, 2, 3, 4, 7, 5, 6, 0, 8]);

        let down = center.moved(Move::Down).unwrap();
        assert_eq!(down.tiles(), vec![1, 0, 3, 4, 2, 5, 6, 7, 8]);

        let left = center.moved(Move::Left).unwrap();
        assert_eq!(left.tiles(), vec![1, 2, 3, 4, 5, 0, 6, 7, 8]);

        let right = center.moved(Move::Right).unwrap();
        assert_eq!(right.tiles(), vec![1, 2, 3, 0, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn illegal_move_leaves_board_untouched() {
        let mut goal = Puzzle::new(3);
        assert!(!goal.apply_move(Move::Up));
        assert!(!goal.apply_move(Move::Left));
        assert_eq!(goal, Puzzle::new(3));
    }

    #[test]
    fn manhattan_is_zero_on_goal_and_counts_displacement() {
        assert_eq!(Puzzle::new(4).manhattan_distance(), 0);

        let one_off = Puzzle::from_tiles(3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(one_off.manhattan_distance(), 1);

        // 8 and 1 swapped corners: each is 2 + 1 away
        let swapped = Puzzle::from_tiles(3, &[8, 2, 3, 4, 5, 6, 7, 1, 0]);
        assert_eq!(swapped.manhattan_distance(), 6);
    }

    #[test]
    fn solvability_follows_inversion_parity() {
        assert!(Puzzle::new(3).is_solvable());
        assert!(Puzzle::new(4).is_solvable());

        let swapped = Puzzle::from_tiles(3, &[2, 1, 3, 4, 5, 6, 7, 8, 0]);
        assert!(!swapped.is_solvable());

        let swapped = Puzzle::from_tiles(4, &[
            2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0,
        ]);
        assert!(!swapped.is_solvable());
    }

    #[test]
    fn shuffle_and_scramble_stay_solvable() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in 2..=4 {
            let mut puzzle = Puzzle::new(size);
            puzzle.shuffle(&mut rng);
            assert!(puzzle.is_solvable());

            let mut walked = Puzzle::new(size);
            walked.scramble(&mut rng, 25);
            assert!(walked.is_solvable());
            assert!(walked.manhattan_distance() <= 25);
        }
    }

    #[test]
    fn equality_ignores_construction_path() {
        let mut walked = Puzzle::new(3);
        walked.apply_move(Move::Right);
        walked.apply_move(Move::Left);
        assert_eq!(walked, Puzzle::new(3));
    }
}
