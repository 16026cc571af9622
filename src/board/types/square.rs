//! Square type and queen-move geometry.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of squares on a side of the board.
pub const BOARD_SIZE: usize = 10;

/// Total number of squares.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Step offsets `(dcol, drow)` for each direction, N first then clockwise.
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// A square on the 10x10 board.
///
/// Squares are plain indices into a fixed arena of 100 positions
/// (`a1` = 0, `b1` = 1, ..., `j10` = 99), so copying and comparing them is
/// as cheap as comparing two bytes. There is exactly one value per position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// All squares in ascending index order.
    pub const ALL: [Square; NUM_SQUARES] = {
        let mut all = [Square(0); NUM_SQUARES];
        let mut i = 0;
        while i < NUM_SQUARES {
            all[i] = Square(i as u8);
            i += 1;
        }
        all
    };

    /// Return true iff `(col, row)` lies on the board.
    #[inline]
    #[must_use]
    pub const fn exists(col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < BOARD_SIZE as i32 && row < BOARD_SIZE as i32
    }

    /// Create a square with bounds checking
    #[must_use]
    pub fn new(col: usize, row: usize) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Square((row * BOARD_SIZE + col) as u8))
        } else {
            None
        }
    }

    /// The square at `(col, row)`.
    ///
    /// # Panics
    /// Panics if either coordinate is out of bounds.
    #[must_use]
    pub fn sq(col: usize, row: usize) -> Self {
        match Square::try_from((col, row)) {
            Ok(sq) => sq,
            Err(err) => panic!("{err}"),
        }
    }

    /// The square with linear index `idx` (0-99).
    ///
    /// # Panics
    /// Panics if `idx` is not below 100.
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        assert!(idx < NUM_SQUARES, "square index out of bounds");
        Square(idx as u8)
    }

    /// Column, 0 = file `a`
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % BOARD_SIZE
    }

    /// Row, 0 = bottom row
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / BOARD_SIZE
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The square `steps` squares away in direction `dir`, or `None` if that
    /// walks off the board or `dir` is not in `0..8`.
    #[must_use]
    pub fn queen_move(self, dir: usize, steps: usize) -> Option<Square> {
        let &(dc, dr) = DIRECTIONS.get(dir)?;
        let steps = i32::try_from(steps).ok()?;
        let col = self.col() as i32 + i32::from(dc) * steps;
        let row = self.row() as i32 + i32::from(dr) * steps;
        if Square::exists(col, row) {
            Some(Square((row * BOARD_SIZE as i32 + col) as u8))
        } else {
            None
        }
    }

    /// True iff `self -> to` runs along a row, column or diagonal.
    #[must_use]
    pub fn is_queen_move(self, to: Square) -> bool {
        if self == to {
            return false;
        }
        let dc = self.col().abs_diff(to.col());
        let dr = self.row().abs_diff(to.row());
        dc == 0 || dr == 0 || dc == dr
    }

    /// Direction index of the queen move `self -> to`.
    ///
    /// # Panics
    /// Panics unless `self.is_queen_move(to)`.
    #[must_use]
    pub fn direction(self, to: Square) -> usize {
        assert!(
            self.is_queen_move(to),
            "{self}-{to} is not a queen move"
        );
        let dc = (to.col() as i32 - self.col() as i32).signum();
        let dr = (to.row() as i32 - self.row() as i32).signum();
        match (dc, dr) {
            (0, 1) => 0,
            (1, 1) => 1,
            (1, 0) => 2,
            (1, -1) => 3,
            (0, -1) => 4,
            (-1, -1) => 5,
            (-1, 0) => 6,
            _ => 7,
        }
    }

    /// Number of king steps between two squares on the same line.
    #[inline]
    #[must_use]
    pub fn distance(self, to: Square) -> usize {
        self.col().abs_diff(to.col()).max(self.row().abs_diff(to.row()))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col() as u8 + b'a') as char, self.row() + 1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((col, row): (usize, usize)) -> Result<Self, Self::Error> {
        if col >= BOARD_SIZE {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        Ok(Square((row * BOARD_SIZE + col) as u8))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let col = match chars.next() {
            Some(c @ 'a'..='j') => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let digits = chars.as_str();
        if digits.is_empty() || digits.starts_with('0') {
            return Err(invalid());
        }
        let row: usize = digits.parse().map_err(|_| invalid())?;
        if !(1..=BOARD_SIZE).contains(&row) {
            return Err(invalid());
        }

        Ok(Square(((row - 1) * BOARD_SIZE + col) as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_names() {
        assert_eq!(Square::sq(0, 0).to_string(), "a1");
        assert_eq!(Square::sq(9, 9).to_string(), "j10");
        assert_eq!(Square::sq(3, 6).to_string(), "d7");
    }

    #[test]
    fn test_parse_accepts_ten() {
        assert_eq!("j10".parse::<Square>().unwrap(), Square::sq(9, 9));
        assert_eq!("a1".parse::<Square>().unwrap().index(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "a", "k1", "a0", "a11", "a01", "A1", "b1x", "1a"] {
            assert!(bad.parse::<Square>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(
            Square::try_from((10, 0)),
            Err(SquareError::ColumnOutOfBounds { col: 10 })
        );
        assert_eq!(
            Square::try_from((0, 12)),
            Err(SquareError::RowOutOfBounds { row: 12 })
        );
    }

    #[test]
    #[should_panic]
    fn test_sq_out_of_bounds_panics() {
        let _ = Square::sq(10, 3);
    }

    #[test]
    fn test_queen_move_directions() {
        let d4 = Square::sq(3, 3);
        assert_eq!(d4.queen_move(0, 2), Some(Square::sq(3, 5)));
        assert_eq!(d4.queen_move(1, 1), Some(Square::sq(4, 4)));
        assert_eq!(d4.queen_move(2, 6), Some(Square::sq(9, 3)));
        assert_eq!(d4.queen_move(3, 3), Some(Square::sq(6, 0)));
        assert_eq!(d4.queen_move(4, 3), Some(Square::sq(3, 0)));
        assert_eq!(d4.queen_move(5, 3), Some(Square::sq(0, 0)));
        assert_eq!(d4.queen_move(6, 1), Some(Square::sq(2, 3)));
        assert_eq!(d4.queen_move(7, 2), Some(Square::sq(1, 5)));
        assert_eq!(d4.queen_move(4, 4), None);
        assert_eq!(d4.queen_move(8, 1), None);
        assert_eq!(d4.queen_move(2, 0), Some(d4));
    }

    #[test]
    fn test_is_queen_move() {
        let a1 = Square::sq(0, 0);
        assert!(a1.is_queen_move(Square::sq(9, 9)));
        assert!(a1.is_queen_move(Square::sq(0, 7)));
        assert!(a1.is_queen_move(Square::sq(5, 0)));
        assert!(!a1.is_queen_move(Square::sq(1, 2)));
        assert!(!a1.is_queen_move(a1));
    }

    #[test]
    fn test_direction_matches_queen_move() {
        let from = Square::sq(4, 5);
        for dir in 0..8 {
            for steps in 1..10 {
                if let Some(to) = from.queen_move(dir, steps) {
                    assert_eq!(from.direction(to), dir);
                    assert_eq!(from.distance(to), steps);
                }
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_direction_rejects_knight_jump() {
        let _ = Square::sq(0, 0).direction(Square::sq(1, 2));
    }
}
