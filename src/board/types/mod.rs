//! Core game types.
//!
//! This module contains the fundamental types used throughout the engine:
//! - `Square` - one of the 100 board positions, plus queen-move geometry
//! - `Piece` - square contents, also used to name the two sides
//! - `Move` - an archer move with its spear throw

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::Piece;
pub use square::{Square, BOARD_SIZE, NUM_SQUARES};

pub(crate) use square::DIRECTIONS;
