// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board positions and their diagonal buckets.
//!
//! A position is always derived from a placement: the row is the index into the
//! placement and the column is the value stored there.
//!
//! For a board of size N there are two families of 2N-1 diagonal buckets:
//!
//! ```text
//! positive (\) bucket = column - row + (N - 1)
//! negative (/) bucket = column + row
//! ```

use std::fmt;

/// A queen's location on the board.
///
/// This is a newtype-style pair so that column and row cannot be swapped by
/// accident when computing diagonals or slopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

/// The pair of diagonal bucket indices implicated by one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagonalIndices {
    /// Index into the top-left to bottom-right (\) table.
    pub positive: usize,
    /// Index into the top-right to bottom-left (/) table.
    pub negative: usize,
}

impl Position {
    /// Create a position from a column and a row.
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// The position of the queen placed in `row` of `placement`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= placement.len()`.
    pub fn in_placement(placement: &[usize], row: usize) -> Self {
        Self::new(placement[row], row)
    }

    /// Iterate over every position of a (possibly partial) placement, in row order.
    pub fn all_in(placement: &[usize]) -> impl Iterator<Item = Position> + '_ {
        placement
            .iter()
            .enumerate()
            .map(|(row, &column)| Position::new(column, row))
    }

    /// Whether this position lies on a board of the given size.
    pub fn is_on_board(self, board_size: usize) -> bool {
        self.column < board_size && self.row < board_size
    }

    /// Diagonal bucket indices for this position on a board of `board_size`.
    ///
    /// Both indices are in `0..2 * board_size - 1` when the position is on the board.
    pub fn diagonal_indices(self, board_size: usize) -> DiagonalIndices {
        debug_assert!(
            self.is_on_board(board_size),
            "Position {} is off a board of size {}",
            self,
            board_size
        );
        DiagonalIndices {
            positive: self.column + (board_size - 1) - self.row,
            negative: self.column + self.row,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(column {}, row {})", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_indices_corners() {
        // N=4: bottom-left corner (0,3) is the first positive bucket,
        // top-right (3,0) the last.
        assert_eq!(Position::new(0, 3).diagonal_indices(4).positive, 0);
        assert_eq!(Position::new(3, 0).diagonal_indices(4).positive, 6);
        assert_eq!(Position::new(0, 0).diagonal_indices(4).negative, 0);
        assert_eq!(Position::new(3, 3).diagonal_indices(4).negative, 6);
    }

    #[test]
    fn test_same_diagonal_shares_bucket() {
        let a = Position::new(1, 1).diagonal_indices(8);
        let b = Position::new(5, 5).diagonal_indices(8);
        assert_eq!(a.positive, b.positive);
        assert_ne!(a.negative, b.negative);

        let c = Position::new(2, 4).diagonal_indices(8);
        let d = Position::new(4, 2).diagonal_indices(8);
        assert_eq!(c.negative, d.negative);
        assert_ne!(c.positive, d.positive);
    }

    #[test]
    fn test_single_cell_board() {
        let indices = Position::new(0, 0).diagonal_indices(1);
        assert_eq!(indices, DiagonalIndices { positive: 0, negative: 0 });
    }

    #[test]
    fn test_all_in() {
        let positions: Vec<_> = Position::all_in(&[2, 0, 3, 1]).collect();
        assert_eq!(positions.len(), 4);
        assert_eq!(positions[0], Position::new(2, 0));
        assert_eq!(positions[3], Position::new(1, 3));
    }
}
