// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering of a placement.
//!
//! One line per row, ` X` at the queen's column and ` .` elsewhere. Rows the
//! placement does not cover (a partial or empty placement) print as all dots.

use std::fmt;

/// Display adapter drawing `placement` on a `board_size` board.
#[derive(Debug, Clone, Copy)]
pub struct Board<'a> {
    placement: &'a [usize],
    board_size: usize,
}

impl<'a> Board<'a> {
    pub fn new(placement: &'a [usize], board_size: usize) -> Self {
        Self {
            placement,
            board_size,
        }
    }
}

impl fmt::Display for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.board_size {
            let queen = self.placement.get(row).copied();
            for column in 0..self.board_size {
                let cell = if queen == Some(column) { " X" } else { " ." };
                f.write_str(cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
