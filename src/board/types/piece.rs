//! Piece type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contents of a square. `Light` and `Dark` double as the two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    #[default]
    Empty,
    Light,
    Dark,
    Spear,
}

impl Piece {
    /// Both playing sides, Light first
    pub const SIDES: [Piece; 2] = [Piece::Light, Piece::Dark];

    /// The other side. Only meaningful for `Light` and `Dark`; the
    /// non-side pieces map to themselves.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Piece {
        match self {
            Piece::Light => Piece::Dark,
            Piece::Dark => Piece::Light,
            other => other,
        }
    }

    /// True for the two archer colours.
    #[inline]
    #[must_use]
    pub const fn is_side(self) -> bool {
        matches!(self, Piece::Light | Piece::Dark)
    }

    /// Single-character board symbol: `W`, `B`, `S` or `-`.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Light => 'W',
            Piece::Dark => 'B',
            Piece::Spear => 'S',
            Piece::Empty => '-',
        }
    }

    /// Parse a board symbol produced by [`Piece::to_char`].
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'W' => Some(Piece::Light),
            'B' => Some(Piece::Dark),
            'S' => Some(Piece::Spear),
            '-' => Some(Piece::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Empty => "empty",
            Piece::Light => "light",
            Piece::Dark => "dark",
            Piece::Spear => "spear",
        };
        f.write_str(name)
    }
}
