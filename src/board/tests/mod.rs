//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `geometry.rs` - Square indexing and queen-move geometry
//! - `movegen.rs` - Reachability and legal move enumeration
//! - `make_unmake.rs` - Move application, undo and game end
//! - `perft.rs` - Move tree counts
//! - `search.rs` - Evaluation and alpha-beta search
//! - `proptest.rs` - Property-based tests

mod geometry;

use super::{Board, Move, Piece, Square};

/// Parse a square name, panicking on bad input.
pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Parse a move, panicking on bad input.
pub(super) fn mv(text: &str) -> Move {
    text.parse().expect("valid move")
}

/// Every legal move found by trying all `(from, to, spear)` triples, sorted
/// into the enumeration order: origin index, then (direction, distance) of
/// the archer move, then (direction, distance) of the spear throw.
pub(super) fn brute_force_moves(board: &Board, side: Piece) -> Vec<Move> {
    let mut probe = board.clone();
    probe.set_turn(side);

    let mut moves = Vec::new();
    for from in probe.squares_with(side).collect::<Vec<_>>() {
        for to in Square::ALL {
            for spear in Square::ALL {
                if probe.is_legal(from, to, spear) {
                    moves.push(Move::new(from, to, spear));
                }
            }
        }
    }
    moves.sort_by_key(|m| {
        (
            m.from().index(),
            m.from().direction(m.to()),
            m.from().distance(m.to()),
            m.to().direction(m.spear()),
            m.to().distance(m.spear()),
        )
    });
    moves
}
