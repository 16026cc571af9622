//! Square indexing and queen-move geometry.

use super::sq;
use crate::board::{Square, BOARD_SIZE, NUM_SQUARES};

#[test]
fn test_index_round_trip() {
    for index in 0..NUM_SQUARES {
        let square = Square::from_index(index);
        assert_eq!(square.index(), index);
        assert_eq!(Square::sq(square.col(), square.row()), square);
        assert_eq!(index, square.row() * BOARD_SIZE + square.col());
    }
}

#[test]
fn test_all_is_in_index_order() {
    assert_eq!(Square::ALL.len(), NUM_SQUARES);
    for (index, square) in Square::ALL.iter().enumerate() {
        assert_eq!(square.index(), index);
    }
}

#[test]
fn test_queen_move_relation_is_symmetric() {
    for a in Square::ALL {
        for b in Square::ALL {
            assert_eq!(a.is_queen_move(b), b.is_queen_move(a), "{a} / {b}");
        }
        assert!(!a.is_queen_move(a));
    }
}

#[test]
fn test_opposite_directions() {
    for a in Square::ALL {
        for b in Square::ALL {
            if a.is_queen_move(b) {
                assert_eq!(b.direction(a), (a.direction(b) + 4) % 8, "{a} / {b}");
                assert_eq!(a.distance(b), b.distance(a));
            }
        }
    }
}

#[test]
fn test_queen_move_stepping_agrees_with_direction() {
    for from in Square::ALL {
        for dir in 0..8 {
            for steps in 1..BOARD_SIZE {
                if let Some(to) = from.queen_move(dir, steps) {
                    assert!(from.is_queen_move(to));
                    assert_eq!(from.direction(to), dir);
                    assert_eq!(from.distance(to), steps);
                }
            }
        }
    }
}

#[test]
fn test_knight_jump_is_not_a_queen_move() {
    assert!(!sq("a1").is_queen_move(sq("b3")));
    assert!(sq("a1").is_queen_move(sq("j10")));
    assert!(sq("a10").is_queen_move(sq("j1")));
    assert!(!sq("a1").is_queen_move(sq("j9")));
}

#[test]
fn test_edge_steps_leave_the_board() {
    assert_eq!(sq("j10").queen_move(0, 1), None);
    assert_eq!(sq("a1").queen_move(4, 1), None);
    assert_eq!(sq("a1").queen_move(1, 9), Some(sq("j10")));
    assert_eq!(sq("e5").queen_move(6, 4), Some(sq("a5")));
}
