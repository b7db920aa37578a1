// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use nqueens_search::{AttackQuery, CollisionTracker};

/// Eight queens on the main diagonal.
pub const DIAGONAL_BOARD: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
/// Four queens on the main diagonal.
pub const DIAGONAL_BOARD_SMALL: [usize; 4] = [0, 1, 2, 3];
/// Eight queens on the anti-diagonal.
pub const REVERSE_BOARD: [usize; 8] = [7, 6, 5, 4, 3, 2, 1, 0];
/// Repeats columns 2 and 4.
pub const RANDOM_BOARD: [usize; 8] = [2, 4, 6, 1, 5, 4, 3, 2];
/// One swap away from `VALID_BOARD`.
pub const ALMOST_VALID_BOARD: [usize; 8] = [5, 3, 0, 7, 4, 1, 6, 2];
pub const VALID_BOARD: [usize; 8] = [5, 3, 0, 4, 7, 1, 6, 2];
pub const VALID_BOARD_SMALL: [usize; 4] = [2, 0, 3, 1];

/// Board sizes with no solution once the three-in-a-line rule is on.
pub const NO_LINE_SOLUTION: [usize; 5] = [2, 3, 5, 6, 7];

/// Recount `placement` with a fresh tracker, the way an independent checker would.
pub fn collisions(placement: &[usize], line_check: bool) -> usize {
    let checker = CollisionTracker::from_placement(placement.len().max(1), line_check, placement)
        .expect("placement fits its own board");
    checker.total_collisions(placement)
}

/// Assert that `placement` is a complete solution on a `board_size` board.
pub fn assert_valid_solution(placement: &[usize], board_size: usize, line_check: bool) {
    let checker = CollisionTracker::new(board_size, line_check).unwrap();
    assert!(
        checker.is_solution(placement),
        "Solver generated invalid solution for N={} (line check {}) w/ {} conflicts: {:?}",
        board_size,
        line_check,
        collisions(placement, line_check),
        placement
    );
}
