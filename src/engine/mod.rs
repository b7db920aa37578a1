// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver contract and search states.
//!
//! Every solver produces a [`Placement`]: one column index per row, row 0 first.
//! For example `[2, 0, 3, 1]` is the board
//!
//! ```text
//!  . . X .
//!  X . . .
//!  . . . X
//!  . X . .
//! ```
//!
//! An empty placement means the search finished without a solution.

use crate::state::statistics::Statistics;

/// Column index per row. Empty when no solution was found.
pub type Placement = Vec<usize>;

/// Where a solver's search currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Still searching. For backtracking this means the stack holds a
    /// conflict-checked prefix that is not yet a full placement.
    Exploring,

    /// A complete placement with zero conflicts was found.
    Solved,

    /// The search space (or restart budget) ran out without a solution.
    Exhausted,
}

impl SearchState {
    /// Whether the search has stopped, successfully or not.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchState::Exploring)
    }
}

/// A generic N-queens solver.
pub trait Solver {
    /// Run the search and return a full placement, or an empty one on failure.
    fn solve(&mut self) -> Placement;

    /// State reached by the most recent call to [`Solver::solve`].
    fn state(&self) -> SearchState;

    /// Counters accumulated by the most recent call to [`Solver::solve`].
    fn statistics(&self) -> &Statistics;

    /// A name for this solver (for logging).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
