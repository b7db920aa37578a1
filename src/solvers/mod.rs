// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two search strategies.
//!
//! - `backtracking`: deterministic depth-first search, finds a solution or
//!   proves there is none
//! - `heuristic`: randomized swap-based local search with restarts
//!
//! Both wrap a tracker implementing [`AttackQuery`](crate::tracker::AttackQuery).

pub mod backtracking;
pub mod heuristic;

pub use backtracking::BacktrackingSolver;
pub use heuristic::HeuristicSolver;

use crate::engine::{Placement, Solver};
use crate::error::Result;

/// Solve by backtracking. Returns an empty placement when no solution exists.
pub fn solve_backtracking(board_size: usize, line_check: bool) -> Result<Placement> {
    Ok(BacktrackingSolver::new(board_size, line_check)?.solve())
}

/// Solve by unbounded local search.
///
/// This does not return for configurations without a solution; use
/// [`HeuristicSolver::with_options`] with a restart budget for those.
pub fn solve_heuristic(board_size: usize, line_check: bool) -> Result<Placement> {
    Ok(HeuristicSolver::new(board_size, line_check)?.solve())
}
