// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The canonical collision tracker.

use std::collections::HashSet;

use super::AttackQuery;
use crate::config::SolverConfig;
use crate::error::{NQueensError, Result};
use crate::geometry::{Position, SlopeKey};

/// Diagonal attack-count tables for one board size and rule setting.
///
/// With N=4 the positive (\) buckets are labelled left to right across the
/// top row and then down the left column:
///
/// ```text
///   3 4 5 6
/// 2 \ . \ .
/// 1 . \ . \
/// 0 \ . \ .
///   . \ . \
/// ```
///
/// and the negative (/) buckets left to right across the top row, then down
/// the right column:
///
/// ```text
///   0 1 2 3
/// . / . / 4
/// / . / . 5
/// . / . / 6
/// / . / .
/// ```
#[derive(Debug, Clone)]
pub struct CollisionTracker {
    config: SolverConfig,
    /// Queen count per top-left to bottom-right diagonal.
    positive: Vec<u32>,
    /// Queen count per top-right to bottom-left diagonal.
    negative: Vec<u32>,
}

impl CollisionTracker {
    /// Create a tracker with all-zero tables.
    pub fn new(board_size: usize, line_check: bool) -> Result<Self> {
        Ok(Self::with_config(SolverConfig::new(board_size, line_check)?))
    }

    /// Create a tracker from an already validated configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            positive: vec![0; config.diagonal_count()],
            negative: vec![0; config.diagonal_count()],
        }
    }

    /// Create a tracker whose tables already reflect `placement`.
    pub fn from_placement(board_size: usize, line_check: bool, placement: &[usize]) -> Result<Self> {
        let mut tracker = Self::new(board_size, line_check)?;
        tracker.check_placement(placement)?;
        tracker.recalculate(placement);
        Ok(tracker)
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    pub fn line_check(&self) -> bool {
        self.config.line_check()
    }

    /// Queen count of a positive (\) diagonal bucket.
    pub fn positive_count(&self, bucket: usize) -> u32 {
        self.positive[bucket]
    }

    /// Queen count of a negative (/) diagonal bucket.
    pub fn negative_count(&self, bucket: usize) -> u32 {
        self.negative[bucket]
    }

    /// Bounds-checked [`AttackQuery::record`].
    pub fn try_record(&mut self, position: Position, delta: isize) -> Result<()> {
        self.check_position(position)?;
        self.record(position, delta);
        Ok(())
    }

    /// Whether `placement` is a complete, valid solution for this tracker's rules.
    ///
    /// The check runs on a scratch copy, so the tracker's own tables are untouched.
    pub fn is_solution(&self, placement: &[usize]) -> bool {
        if placement.len() != self.config.board_size() || self.check_placement(placement).is_err() {
            return false;
        }
        let mut scratch = Self::with_config(self.config);
        scratch.recalculate(placement);
        let no_cross = Position::all_in(placement)
            .all(|position| scratch.cross_attacks_against(placement, position) == 0);
        no_cross && scratch.total_collisions(placement) == 0
    }

    fn check_position(&self, position: Position) -> Result<()> {
        if position.is_on_board(self.config.board_size()) {
            Ok(())
        } else {
            Err(NQueensError::PositionOutOfBounds {
                column: position.column,
                row: position.row,
                board_size: self.config.board_size(),
            })
        }
    }

    fn check_placement(&self, placement: &[usize]) -> Result<()> {
        Position::all_in(placement).try_for_each(|position| self.check_position(position))
    }

    fn bump(count: &mut u32, delta: isize) {
        let updated = (*count as isize) + delta;
        debug_assert!(updated >= 0, "Diagonal count went negative: unpaired removal");
        *count = updated.max(0) as u32;
    }
}

impl AttackQuery for CollisionTracker {
    fn board_size(&self) -> usize {
        self.config.board_size()
    }

    fn recalculate(&mut self, placement: &[usize]) {
        self.positive.fill(0);
        self.negative.fill(0);

        let board_size = self.config.board_size();
        for position in Position::all_in(placement) {
            let indices = position.diagonal_indices(board_size);
            self.positive[indices.positive] += 1;
            self.negative[indices.negative] += 1;
        }
    }

    fn record(&mut self, position: Position, delta: isize) {
        let indices = position.diagonal_indices(self.config.board_size());
        Self::bump(&mut self.positive[indices.positive], delta);
        Self::bump(&mut self.negative[indices.negative], delta);
    }

    fn diagonal_attacks_against(&self, position: Position) -> usize {
        let indices = position.diagonal_indices(self.config.board_size());
        let positive = self.positive[indices.positive] as usize;
        let negative = self.negative[indices.negative] as usize;
        positive.saturating_sub(1) + negative.saturating_sub(1)
    }

    fn cross_attacks_against(&self, placement: &[usize], position: Position) -> usize {
        Position::all_in(placement)
            .filter(|&other| other != position)
            .map(|other| {
                usize::from(other.column == position.column) + usize::from(other.row == position.row)
            })
            .sum()
    }

    fn line_attacks_against(&self, placement: &[usize], position: Position) -> usize {
        if !self.config.line_check() {
            return 0;
        }

        let mut seen = HashSet::with_capacity(placement.len());
        Position::all_in(placement)
            .filter(|other| other.row != position.row)
            .filter_map(|other| SlopeKey::between(position, other))
            .filter(|&key| !seen.insert(key))
            .count()
    }

    fn total_collisions(&self, placement: &[usize]) -> usize {
        let diagonal: usize = self
            .positive
            .iter()
            .chain(self.negative.iter())
            .map(|&count| (count as usize).saturating_sub(1))
            .sum();

        let line: usize = Position::all_in(placement)
            .map(|position| self.line_attacks_against(placement, position))
            .sum();

        diagonal + line
    }
}
