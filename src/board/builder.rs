//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing a layout.
//!
//! # Example
//! ```
//! use amazons_engine::board::{BoardBuilder, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square::sq(0, 0), Piece::Light)
//!     .piece(Square::sq(9, 9), Piece::Dark)
//!     .piece(Square::sq(5, 5), Piece::Spear)
//!     .side_to_move(Piece::Dark)
//!     .build();
//! assert_eq!(board.turn(), Piece::Dark);
//! ```

use super::{Board, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Piece,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Piece::Light,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for side in Piece::SIDES {
            for sq in board.squares_with(side) {
                builder.pieces.push((sq, side));
            }
        }
        builder
    }

    /// Place a piece (archer or spear) on the board.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        if piece != Piece::Empty {
            self.pieces.push((square, piece));
        }
        self
    }

    /// Place spears on every listed square.
    #[must_use]
    pub fn spears(self, squares: &[Square]) -> Self {
        squares
            .iter()
            .fold(self, |builder, &sq| builder.piece(sq, Piece::Spear))
    }

    /// Remove whatever is on a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    ///
    /// # Panics
    /// Panics if `side` is not `Light` or `Dark`.
    #[must_use]
    pub fn side_to_move(mut self, side: Piece) -> Self {
        assert!(side.is_side(), "side to move must be Light or Dark");
        self.side_to_move = side;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.cells[square.index()] = piece;
        }
        board.set_turn(self.side_to_move);
        board
    }
}
