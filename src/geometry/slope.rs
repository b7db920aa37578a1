// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-precision slope keys for the three-in-a-line rule.
//!
//! Two queens define a line; a third queen is collinear with them when it has
//! the same slope relative to either of them. Slopes are compared as
//! `dx / dy` rounded to four fractional digits, computed in exact integer
//! arithmetic so the key never depends on floating-point formatting.

/// Scale factor giving four fractional digits of slope precision.
pub const SLOPE_SCALE: i64 = 10_000;

/// Slope `dx / dy` between two positions, scaled by [`SLOPE_SCALE`] and
/// rounded half away from zero.
///
/// A vertical line (same column) has key 0 regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlopeKey(i64);

impl SlopeKey {
    /// Compute the key from `from` towards `to`.
    ///
    /// Returns `None` when both positions are in the same row, which cannot
    /// happen between distinct queens of a placement.
    pub fn between(from: super::Position, to: super::Position) -> Option<Self> {
        let dx = from.column as i64 - to.column as i64;
        let dy = from.row as i64 - to.row as i64;
        Self::from_deltas(dx, dy)
    }

    /// Compute the key for a raw `dx / dy` ratio.
    pub fn from_deltas(dx: i64, dy: i64) -> Option<Self> {
        if dy == 0 {
            return None;
        }
        // Normalise so the denominator is positive.
        let (numerator, denominator) = if dy < 0 {
            (-dx * SLOPE_SCALE, -dy)
        } else {
            (dx * SLOPE_SCALE, dy)
        };
        let magnitude = (2 * numerator.abs() + denominator) / (2 * denominator);
        Some(Self(numerator.signum() * magnitude))
    }

    /// The scaled integer value of this key.
    pub fn value(self) -> i64 {
        self.0
    }
}
