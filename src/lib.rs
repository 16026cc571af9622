//! Rules engine and alpha-beta search for the game of the Amazons.

pub mod board;
pub mod player;

pub use board::{Board, Move, Piece, Square};
pub use player::{AiPlayer, GameContext, Player, RandomPlayer};
