// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Known attack counts for hand-built boards.

mod common;

use common::*;
use nqueens_search::{AttackQuery, CollisionTracker, Position};

struct AttackCase {
    name: &'static str,
    line_check: bool,
    placement: &'static [usize],
    check: Position,
    diagonal: usize,
    cross: usize,
    line: usize,
}

#[test]
fn test_attacks_against_position() {
    let cases = [
        AttackCase {
            name: "small diagonal board, position (0,0)",
            line_check: true,
            placement: &DIAGONAL_BOARD_SMALL,
            check: Position::new(0, 0),
            diagonal: 3,
            cross: 0,
            line: 2,
        },
        AttackCase {
            name: "diagonal board, position (1,1), no line check",
            line_check: false,
            placement: &DIAGONAL_BOARD,
            check: Position::new(1, 1),
            diagonal: 7,
            cross: 0,
            line: 0,
        },
        AttackCase {
            name: "random board, position (2,0)",
            line_check: true,
            placement: &RANDOM_BOARD,
            check: Position::new(2, 0),
            diagonal: 0,
            cross: 1,
            line: 1,
        },
        AttackCase {
            name: "valid board, position (5,0)",
            line_check: true,
            placement: &VALID_BOARD,
            check: Position::new(5, 0),
            diagonal: 0,
            cross: 0,
            line: 0,
        },
    ];

    for case in &cases {
        let tracker =
            CollisionTracker::from_placement(case.placement.len(), case.line_check, case.placement)
                .unwrap();
        assert_eq!(tracker.diagonal_attacks_against(case.check), case.diagonal, "{}", case.name);
        assert_eq!(
            tracker.cross_attacks_against(case.placement, case.check),
            case.cross,
            "{}",
            case.name
        );
        assert_eq!(
            tracker.line_attacks_against(case.placement, case.check),
            case.line,
            "{}",
            case.name
        );
    }
}

#[test]
fn test_total_collisions() {
    let cases: [(&str, bool, &[usize], usize); 9] = [
        ("small diagonal board", true, &DIAGONAL_BOARD_SMALL, 11),
        ("diagonal board, no line check", false, &DIAGONAL_BOARD, 7),
        ("reverse diagonal board", true, &REVERSE_BOARD, 55),
        ("random board", true, &RANDOM_BOARD, 14),
        ("almost valid board", true, &ALMOST_VALID_BOARD, 4),
        ("valid board", true, &VALID_BOARD, 0),
        ("valid small board", true, &VALID_BOARD_SMALL, 0),
        ("small rotated board", true, &[1, 2, 3, 0], 6),
        ("valid board, no line check", false, &VALID_BOARD, 0),
    ];

    for (name, line_check, placement, expected) in cases {
        let tracker = CollisionTracker::from_placement(placement.len(), line_check, placement).unwrap();
        assert_eq!(tracker.total_collisions(placement), expected, "{}", name);
    }
}

#[test]
fn test_fresh_tracker_needs_recalculate() {
    // A new tracker starts empty; totals only reflect what has been recorded.
    let mut tracker = CollisionTracker::new(8, false).unwrap();
    assert_eq!(tracker.total_collisions(&DIAGONAL_BOARD), 0);

    tracker.recalculate(&DIAGONAL_BOARD);
    assert_eq!(tracker.total_collisions(&DIAGONAL_BOARD), 7);
}

#[test]
fn test_is_solution_fixtures() {
    let tracker = CollisionTracker::new(8, true).unwrap();
    assert!(tracker.is_solution(&VALID_BOARD));
    assert!(!tracker.is_solution(&ALMOST_VALID_BOARD));
    assert!(!tracker.is_solution(&RANDOM_BOARD));
    assert!(!tracker.is_solution(&REVERSE_BOARD));
}
