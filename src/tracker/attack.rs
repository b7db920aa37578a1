// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The attack query contract consumed by the solvers.

use crate::geometry::Position;

/// Attack counting over a placement with incrementally maintained diagonals.
///
/// A placement is a slice of column indices, one per row, indexed by row.
/// During backtracking the slice is a prefix of a full placement.
pub trait AttackQuery {
    /// Board size this tracker is bound to.
    fn board_size(&self) -> usize;

    /// Reset both diagonal tables and rebuild them from `placement`.
    fn recalculate(&mut self, placement: &[usize]);

    /// Add `delta` (+1 on placement, -1 on removal) to both diagonals of `position`.
    ///
    /// Callers own the pairing discipline: each queen is recorded exactly once
    /// with +1 while present and once with -1 when removed.
    fn record(&mut self, position: Position, delta: isize);

    /// Number of other queens sharing either diagonal with `position`.
    ///
    /// # Precondition
    ///
    /// `position` must currently be recorded in the tables. Its own queen is
    /// assumed present in both buckets and is subtracted out.
    fn diagonal_attacks_against(&self, position: Position) -> usize;

    /// Number of queens in `placement` sharing the column or row of `position`,
    /// excluding `position` itself.
    fn cross_attacks_against(&self, placement: &[usize], position: Position) -> usize;

    /// Number of queens in `placement` that are the third (or later) queen on a
    /// line through `position`. Always zero when the line rule is disabled.
    fn line_attacks_against(&self, placement: &[usize], position: Position) -> usize;

    /// Excess queens over all diagonals plus line attacks for every queen.
    ///
    /// Zero means `placement` has no diagonal or three-in-a-line violations.
    /// Row and column clashes are not counted here.
    fn total_collisions(&self, placement: &[usize]) -> usize;

    /// Every kind of attack against `position`: diagonal, cross and line.
    ///
    /// This is the test applied to the newest queen while backtracking.
    fn attacks_against(&self, placement: &[usize], position: Position) -> usize {
        self.diagonal_attacks_against(position)
            + self.cross_attacks_against(placement, position)
            + self.line_attacks_against(placement, position)
    }

    /// Diagonal and line attacks against `position`.
    ///
    /// Used by the local search, where placements are always permutations.
    fn conflicts_against(&self, placement: &[usize], position: Position) -> usize {
        self.diagonal_attacks_against(position) + self.line_attacks_against(placement, position)
    }
}
