// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver configuration.
//!
//! A configuration binds a tracker or solver to one board size and rule
//! setting for its whole life.

use crate::error::{NQueensError, Result};

/// Board size and rule selection shared by the tracker and both solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    board_size: usize,
    line_check: bool,
}

impl SolverConfig {
    /// Validate and build a configuration.
    ///
    /// `line_check` enables the three-in-a-line rule on top of the mandatory
    /// row, column and diagonal rules.
    pub fn new(board_size: usize, line_check: bool) -> Result<Self> {
        if board_size < 1 {
            return Err(NQueensError::InvalidConfiguration { board_size });
        }
        Ok(Self {
            board_size,
            line_check,
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn line_check(&self) -> bool {
        self.line_check
    }

    /// Number of buckets in each diagonal table (2N - 1).
    pub fn diagonal_count(&self) -> usize {
        2 * self.board_size - 1
    }
}

/// Extra knobs for the randomized local search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeuristicOptions {
    /// Seed for reproducible shuffles. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Give up after this many shuffles. `None` searches until a solution is found.
    pub max_restarts: Option<usize>,
}

impl HeuristicOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_restarts(mut self, max_restarts: usize) -> Self {
        self.max_restarts = Some(max_restarts);
        self
    }
}
