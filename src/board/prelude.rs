//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use amazons_engine::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.turn(), Piece::Light);
//! ```

pub use super::{
    find_best_move, search, Board, BoardBuilder, LayoutError, Move, MoveParseError, Piece,
    SearchConfig, SearchState, Square, SquareError,
};
