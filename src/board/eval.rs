//! Static evaluation.

use super::{Board, Piece};

/// Score of a won position: positive for a Light win, negative for Dark.
/// Larger than any mobility difference.
pub const WINNING_VALUE: i32 = i32::MAX - 1;

/// Bound used to open the alpha-beta window. Beyond any reachable score.
pub const INFINITY: i32 = i32::MAX;

impl Board {
    /// Light-positive static score.
    ///
    /// A finished game scores `±WINNING_VALUE`; otherwise the score is Light's
    /// legal move count minus Dark's.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        match self.winner() {
            Some(Piece::Light) => return WINNING_VALUE,
            Some(_) => return -WINNING_VALUE,
            None => {}
        }
        let light = self.mobility(Piece::Light) as i32;
        let dark = self.mobility(Piece::Dark) as i32;
        light - dark
    }
}
