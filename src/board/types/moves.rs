//! Move type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::MoveParseError;

/// An archer move followed by a spear throw: `from-to(spear)`.
///
/// Equality is by value of the triple. Whether the move is legal depends on
/// the position; see [`Board::is_legal_move`](crate::board::Board::is_legal_move).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    spear: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, spear: Square) -> Self {
        Move { from, to, spear }
    }

    /// Square the archer leaves
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Square the archer lands on
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Square the spear lands on
    #[inline]
    #[must_use]
    pub const fn spear(self) -> Square {
        self.spear
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.from, self.to, self.spear)
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MoveParseError::InvalidFormat {
            notation: s.to_string(),
        };

        let s = s.trim();
        let (from_str, rest) = s.split_once('-').ok_or_else(invalid)?;
        let (to_str, rest) = rest.split_once('(').ok_or_else(invalid)?;
        let spear_str = rest.strip_suffix(')').ok_or_else(invalid)?;

        let square = |text: &str| {
            text.parse::<Square>()
                .map_err(|_| MoveParseError::InvalidSquare {
                    notation: text.to_string(),
                })
        };
        let from = square(from_str)?;
        let to = square(to_str)?;
        let spear = square(spear_str)?;

        if !from.is_queen_move(to) || !to.is_queen_move(spear) {
            return Err(MoveParseError::NotQueenMove {
                notation: s.to_string(),
            });
        }

        Ok(Move::new(from, to, spear))
    }
}
