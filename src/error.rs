// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for solver and tracker construction.
//!
//! A search that finds no solution is not an error: solvers report it as an
//! empty placement together with [`SearchState::Exhausted`](crate::engine::SearchState).

use thiserror::Error;

/// Errors raised by the N-queens core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NQueensError {
    /// Board size below one.
    #[error("invalid configuration: board size must be at least 1, got {board_size}")]
    InvalidConfiguration { board_size: usize },

    /// A position handed to the tracker does not lie on its board.
    #[error("position (column {column}, row {row}) is outside a board of size {board_size}")]
    PositionOutOfBounds {
        column: usize,
        row: usize,
        board_size: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NQueensError>;
