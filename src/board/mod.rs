//! Amazons board representation, rules and search.
//!
//! A 10x10 board with four Light and four Dark archers. Each move is a queen
//! move of one archer followed by a spear thrown from its landing square;
//! spears block movement for the rest of the game. A side that cannot move
//! loses.
//!
//! # Example
//! ```
//! use amazons_engine::board::{find_best_move, Board, Piece};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves().count(), 2176);
//!
//! let mv = board.parse_move("d1-d7(g7)").unwrap();
//! board.make_move(mv);
//! assert_eq!(board.turn(), Piece::Dark);
//! assert_eq!(board.get("g7".parse().unwrap()), Piece::Spear);
//!
//! let reply = find_best_move(&mut board, 1).unwrap();
//! assert!(board.is_legal_move(reply));
//! ```

mod builder;
mod error;
mod eval;
mod layout;
mod make_unmake;
mod movegen;
mod perft;
pub mod prelude;
mod rays;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{LayoutError, MoveParseError, SquareError};
pub use movegen::{LegalMoves, MoveCursor, ReachableFrom};
pub use state::{Board, UnmakeInfo};
pub use types::{Move, Piece, Square, BOARD_SIZE, NUM_SQUARES};

// Public API - search functions and configuration
pub use search::{
    alpha_beta, find_best_move, search, SearchConfig, SearchInfoCallback, SearchIterationInfo,
    SearchResult, SearchState, SearchStats, Sense, DEFAULT_DEPTH, INFINITY, WINNING_VALUE,
};
