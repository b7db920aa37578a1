// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric helpers for queens on a square board.
//!
//! This module contains small value types with no search state:
//! - Position: a queen's (column, row) on the board
//! - DiagonalIndices: the two diagonal buckets a position occupies
//! - SlopeKey: fixed-precision slope between two positions

pub mod position;
pub mod slope;

// Re-export for convenience
pub use position::{DiagonalIndices, Position};
pub use slope::{SlopeKey, SLOPE_SCALE};
