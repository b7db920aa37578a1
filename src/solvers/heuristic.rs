// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gradient-style local search with random restarts.
//!
//! The placement is always a permutation, so rows and columns never clash and
//! only diagonal and line conflicts remain. Each restart shuffles the
//! permutation, then sweeps every pair of rows `i < j` once: when either queen
//! is in conflict the two columns are swapped, and the swap is kept unless the
//! pair's combined conflict count went up. A sweep that leaves no collisions
//! ends the search.
//!
//! Without a restart budget there is no termination guarantee; in practice the
//! search converges quickly whenever solutions exist.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::{HeuristicOptions, SolverConfig};
use crate::engine::{Placement, SearchState, Solver};
use crate::error::Result;
use crate::geometry::Position;
use crate::state::statistics::{Counters, Statistics};
use crate::tracker::{AttackQuery, CollisionTracker};

/// Randomized swap-based N-queens solver.
#[derive(Debug)]
pub struct HeuristicSolver<T: AttackQuery = CollisionTracker> {
    tracker: T,
    placement: Vec<usize>,
    rng: StdRng,
    options: HeuristicOptions,
    state: SearchState,
    statistics: Statistics,
}

impl HeuristicSolver<CollisionTracker> {
    /// Create an unbounded solver seeded from the OS.
    pub fn new(board_size: usize, line_check: bool) -> Result<Self> {
        Self::with_options(board_size, line_check, HeuristicOptions::default())
    }

    /// Create a solver with an explicit seed and/or restart budget.
    pub fn with_options(
        board_size: usize,
        line_check: bool,
        options: HeuristicOptions,
    ) -> Result<Self> {
        let config = SolverConfig::new(board_size, line_check)?;
        Ok(Self::with_tracker(CollisionTracker::with_config(config), options))
    }
}

impl<T: AttackQuery> HeuristicSolver<T> {
    /// Create a solver around an existing tracker.
    pub fn with_tracker(mut tracker: T, options: HeuristicOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        // Identity permutation; shuffled at the start of every restart.
        let placement: Vec<usize> = (0..tracker.board_size()).collect();
        tracker.recalculate(&placement);

        Self {
            tracker,
            placement,
            rng,
            options,
            state: SearchState::Exploring,
            statistics: Statistics::new(),
        }
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    /// The current permutation (a solution once the state is `Solved`).
    pub fn placement(&self) -> &[usize] {
        &self.placement
    }

    /// Shuffle the permutation and rebuild the tracker from scratch.
    fn restart(&mut self) {
        self.placement.shuffle(&mut self.rng);
        self.tracker.recalculate(&self.placement);
        self.statistics.increment(Counters::Restarts);
    }

    /// One pass over every unordered pair of rows.
    fn sweep(&mut self) {
        let board_size = self.placement.len();
        for i in 0..board_size.saturating_sub(1) {
            for j in i + 1..board_size {
                let before = self.pair_conflicts(i, j);
                if before == 0 {
                    continue;
                }

                self.swap(i, j);
                self.statistics.increment(Counters::SwapsTried);

                if self.pair_conflicts(i, j) > before {
                    self.swap(i, j);
                    self.statistics.increment(Counters::SwapsReverted);
                }
            }
        }
    }

    fn pair_conflicts(&self, a: usize, b: usize) -> usize {
        let qa = Position::in_placement(&self.placement, a);
        let qb = Position::in_placement(&self.placement, b);
        self.tracker.conflicts_against(&self.placement, qa)
            + self.tracker.conflicts_against(&self.placement, qb)
    }

    /// Exchange the columns of rows `a` and `b`, keeping the tables in step.
    fn swap(&mut self, a: usize, b: usize) {
        self.record_row(a, -1);
        self.record_row(b, -1);
        self.placement.swap(a, b);
        self.record_row(a, 1);
        self.record_row(b, 1);
    }

    fn record_row(&mut self, row: usize, delta: isize) {
        let position = Position::in_placement(&self.placement, row);
        self.tracker.record(position, delta);
        let counter = if delta > 0 {
            Counters::Placements
        } else {
            Counters::Removals
        };
        self.statistics.increment(counter);
    }

    fn budget_exhausted(&self) -> bool {
        self.options
            .max_restarts
            .is_some_and(|max| self.statistics.get(Counters::Restarts) >= max as u64)
    }
}

impl<T: AttackQuery> Solver for HeuristicSolver<T> {
    fn solve(&mut self) -> Placement {
        self.statistics.reset();
        self.state = SearchState::Exploring;

        loop {
            if self.budget_exhausted() {
                debug!(
                    "Gave up on N={} after {} restarts",
                    self.tracker.board_size(),
                    self.statistics.get(Counters::Restarts)
                );
                self.state = SearchState::Exhausted;
                return Placement::new();
            }

            self.restart();
            self.sweep();

            let remaining = self.tracker.total_collisions(&self.placement);
            if remaining == 0 {
                debug!(
                    "Solved N={} after {} restarts",
                    self.tracker.board_size(),
                    self.statistics.get(Counters::Restarts)
                );
                self.state = SearchState::Solved;
                return self.placement.clone();
            }
            debug!("Restart left {} collisions", remaining);
        }
    }

    fn state(&self) -> SearchState {
        self.state
    }

    fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
