// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first search over one column choice per row.
//!
//! The solver keeps an explicit stack of columns (row = stack index) instead of
//! recursing, so the depth is bounded by the board size. Each step tests only
//! the newest queen against the rest of the stack, relying on the tracker's
//! incrementally maintained diagonal tables.
//!
//! # Step rules
//!
//! 1. Newest queen attacked: move it one column right. If it is already in
//!    the last column, pop it and advance the row above instead (LIFO).
//!    Emptying the stack exhausts the search.
//! 2. Newest queen safe and the stack is full: solved.
//! 3. Newest queen safe otherwise: push column 0 on the next row.
//!
//! Columns are tried left to right, so the result is deterministic for a
//! given board size and rule setting.

use log::{debug, info, trace};

use crate::config::SolverConfig;
use crate::engine::{Placement, SearchState, Solver};
use crate::error::Result;
use crate::geometry::Position;
use crate::state::statistics::{Counters, Statistics};
use crate::tracker::{AttackQuery, CollisionTracker};

/// Backtracking N-queens solver.
#[derive(Debug)]
pub struct BacktrackingSolver<T: AttackQuery = CollisionTracker> {
    tracker: T,
    /// Column per committed row.
    stack: Vec<usize>,
    state: SearchState,
    statistics: Statistics,
}

impl BacktrackingSolver<CollisionTracker> {
    /// Create a solver for a board of `board_size` with optional line checking.
    pub fn new(board_size: usize, line_check: bool) -> Result<Self> {
        let config = SolverConfig::new(board_size, line_check)?;
        Ok(Self::with_tracker(CollisionTracker::with_config(config)))
    }
}

impl<T: AttackQuery> BacktrackingSolver<T> {
    /// Create a solver around an existing tracker. The tracker is reset.
    pub fn with_tracker(tracker: T) -> Self {
        let board_size = tracker.board_size();
        let mut solver = Self {
            tracker,
            stack: Vec::with_capacity(board_size),
            state: SearchState::Exploring,
            statistics: Statistics::new(),
        };
        solver.reset();
        solver
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// The rows committed so far.
    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    /// Return to the initial state: column 0 on row 0.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.tracker.recalculate(&[]);
        self.statistics.reset();
        self.state = SearchState::Exploring;
        self.push(0);
    }

    /// Perform one transition of the search.
    ///
    /// Calling `step` after the search has stopped returns the terminal state
    /// again without changing anything.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_terminal() {
            return self.state;
        }

        let Some(top) = self.top() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };

        let attacks = self.tracker.attacks_against(&self.stack, top);
        self.state = if attacks > 0 {
            self.advance()
        } else if self.stack.len() == self.tracker.board_size() {
            SearchState::Solved
        } else {
            self.push(0);
            SearchState::Exploring
        };
        self.state
    }

    /// Move the newest queen to its next column, popping exhausted rows.
    fn advance(&mut self) -> SearchState {
        let last_column = self.tracker.board_size() - 1;

        while self.stack.last() == Some(&last_column) {
            self.pop();
            self.statistics.increment(Counters::Backtracks);
            trace!("Backtracked to depth {}", self.stack.len());
        }

        match self.pop() {
            Some(column) => {
                self.push(column + 1);
                SearchState::Exploring
            }
            None => SearchState::Exhausted,
        }
    }

    fn top(&self) -> Option<Position> {
        self.stack
            .last()
            .map(|&column| Position::new(column, self.stack.len() - 1))
    }

    fn push(&mut self, column: usize) {
        self.stack.push(column);
        let row = self.stack.len() - 1;
        self.tracker.record(Position::new(column, row), 1);
        self.statistics.increment(Counters::Placements);
    }

    fn pop(&mut self) -> Option<usize> {
        let top = self.top()?;
        self.tracker.record(top, -1);
        self.statistics.increment(Counters::Removals);
        self.stack.pop()
    }
}

impl<T: AttackQuery> Solver for BacktrackingSolver<T> {
    fn solve(&mut self) -> Placement {
        self.reset();

        loop {
            match self.step() {
                SearchState::Exploring => continue,
                SearchState::Solved => {
                    debug!(
                        "Solved N={} after {} backtracks",
                        self.tracker.board_size(),
                        self.statistics.get(Counters::Backtracks)
                    );
                    return self.stack.clone();
                }
                SearchState::Exhausted => {
                    info!("No solution found for N={}", self.tracker.board_size());
                    return Placement::new();
                }
            }
        }
    }

    fn state(&self) -> SearchState {
        self.state
    }

    fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn name(&self) -> &str {
        "Backtracking"
    }
}
