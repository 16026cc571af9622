//! Text rendering and parsing of board layouts.
//!
//! The grid lists row 10 first and row 1 last. Every cell is printed as a
//! space followed by `W` (Light), `B` (Dark), `S` (spear) or `-` (empty):
//!
//! ```text
//!    - - - B - - B - - -
//!    - - - - - - - - - -
//! ```

use std::fmt;

use super::error::LayoutError;
use super::{Board, Piece, Square, BOARD_SIZE};

impl Board {
    /// Parse a grid in the format produced by `Display`, with `side` to move.
    ///
    /// Blank lines are skipped and cells may be separated by any whitespace.
    ///
    /// # Errors
    /// Returns a [`LayoutError`] if the grid is not 10x10, contains an
    /// unknown symbol, or `side` is not `Light` or `Dark`.
    pub fn from_layout(layout: &str, side: Piece) -> Result<Self, LayoutError> {
        if !side.is_side() {
            return Err(LayoutError::InvalidSide);
        }

        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (line_idx, line) in rows.iter().enumerate() {
            let row = BOARD_SIZE - 1 - line_idx;
            let cells: Vec<&str> = line.split_whitespace().collect();
            if cells.len() != BOARD_SIZE {
                return Err(LayoutError::WrongColumnCount {
                    row,
                    found: cells.len(),
                });
            }
            for (col, cell) in cells.into_iter().enumerate() {
                let mut chars = cell.chars();
                let piece = match (chars.next(), chars.next()) {
                    (Some(c), None) => Piece::from_char(c),
                    _ => None,
                }
                .ok_or_else(|| LayoutError::InvalidCell {
                    row,
                    cell: cell.to_string(),
                })?;
                board.cells[Square::sq(col, row).index()] = piece;
            }
        }
        board.set_turn(side);
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_SIZE).rev() {
            f.write_str("  ")?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", self.get_at(col, row).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INITIAL: &str = "
        - - - B - - B - - -
        - - - - - - - - - -
        - - - - - - - - - -
        B - - - - - - - - B
        - - - - - - - - - -
        - - - - - - - - - -
        W - - - - - - - - W
        - - - - - - - - - -
        - - - - - - - - - -
        - - - W - - W - - -
    ";

    #[test]
    fn test_parse_initial_layout() {
        let board = Board::from_layout(INITIAL, Piece::Light).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_render_rows_top_down() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "   - - - B - - B - - -");
        assert_eq!(lines[9], "   - - - W - - W - - -");
    }

    #[test]
    fn test_render_parse_round_trip() {
        let mut board = Board::new();
        board.make_move("d1-d5(h5)".parse().unwrap());
        let parsed = Board::from_layout(&board.to_string(), Piece::Dark).unwrap();
        assert_eq!(parsed.cells, board.cells);
        assert_eq!(parsed.get_at(7, 4), Piece::Spear);
    }

    #[test]
    fn test_layout_errors() {
        assert_eq!(
            Board::from_layout("- - -", Piece::Light),
            Err(LayoutError::WrongRowCount { found: 1 })
        );
        let short_row = INITIAL.replacen("B - - - - - - - - B", "B - - - - - - - B", 1);
        assert_eq!(
            Board::from_layout(&short_row, Piece::Light),
            Err(LayoutError::WrongColumnCount { row: 6, found: 9 })
        );
        let bad_cell = INITIAL.replacen("W - - - - - - - - W", "W - - X - - - - - W", 1);
        assert_eq!(
            Board::from_layout(&bad_cell, Piece::Light),
            Err(LayoutError::InvalidCell {
                row: 3,
                cell: "X".to_string()
            })
        );
        assert_eq!(
            Board::from_layout(INITIAL, Piece::Spear),
            Err(LayoutError::InvalidSide)
        );
    }
}
