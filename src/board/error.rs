//! Error types for board operations.

use std::fmt;

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Column out of bounds (must be 0-9)
    ColumnOutOfBounds { col: usize },
    /// Row out of bounds (must be 0-9)
    RowOutOfBounds { row: usize },
    /// Invalid square notation (expected `a1`..`j10`)
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-9)")
            }
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-9)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Text is not of the form `from-to(spear)`
    InvalidFormat { notation: String },
    /// One of the three squares is not valid notation
    InvalidSquare { notation: String },
    /// Archer move or spear throw is not along a straight line
    NotQueenMove { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidFormat { notation } => {
                write!(f, "Move '{notation}' is not of the form from-to(spear)")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square '{notation}' in move")
            }
            MoveParseError::NotQueenMove { notation } => {
                write!(f, "Move '{notation}' is not made of queen moves")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for board layout parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Layout does not have exactly 10 rows
    WrongRowCount { found: usize },
    /// A row does not have exactly 10 cells
    WrongColumnCount { row: usize, found: usize },
    /// Unknown cell symbol
    InvalidCell { row: usize, cell: String },
    /// Side to move must be Light or Dark
    InvalidSide,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::WrongRowCount { found } => {
                write!(f, "Layout must have 10 rows, found {found}")
            }
            LayoutError::WrongColumnCount { row, found } => {
                write!(f, "Row {row} must have 10 cells, found {found}")
            }
            LayoutError::InvalidCell { row, cell } => {
                write!(f, "Invalid cell '{cell}' in row {row}")
            }
            LayoutError::InvalidSide => write!(f, "Side to move must be light or dark"),
        }
    }
}

impl std::error::Error for LayoutError {}
