// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! N-queens search: place N queens on an N×N board so that no two share a
//! row, column or diagonal, and optionally no three lie on one line.
//!
//! # Architecture
//!
//! ## Collision tracking
//!
//! [`CollisionTracker`] keeps one queen count per diagonal in two tables of
//! 2N-1 buckets. Single-queen changes update two counters, so testing a move
//! never rescans the board for diagonals. Row/column and three-in-a-line
//! queries are linear scans over the placement.
//!
//! ## Search strategies
//!
//! 1. **BacktrackingSolver**: depth-first over columns per row with an explicit
//!    stack (`Exploring` / `Solved` / `Exhausted`)
//! 2. **HeuristicSolver**: shuffled permutation improved by non-worsening
//!    pairwise swaps, restarting until no collisions remain
//!
//! Both consume the tracker through the [`AttackQuery`] trait and return a
//! [`Placement`]: one column per row, or an empty vector when no solution was
//! found.
//!
//! # Example
//!
//! ```
//! use nqueens_search::{AttackQuery, BacktrackingSolver, CollisionTracker, Solver};
//!
//! let mut solver = BacktrackingSolver::new(8, true).unwrap();
//! let placement = solver.solve();
//!
//! let checker = CollisionTracker::from_placement(8, true, &placement).unwrap();
//! assert_eq!(checker.total_collisions(&placement), 0);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod solvers;
pub mod state;
pub mod tracker;

// Re-export commonly used types
pub use board::Board;
pub use config::{HeuristicOptions, SolverConfig};
pub use engine::{Placement, SearchState, Solver};
pub use error::{NQueensError, Result};
pub use geometry::Position;
pub use solvers::{solve_backtracking, solve_heuristic, BacktrackingSolver, HeuristicSolver};
pub use tracker::{AttackQuery, CollisionTracker};
