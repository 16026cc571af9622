//! Legal move enumeration.
//!
//! Moves come out in a fixed order: archers by ascending square index, then
//! destinations by ascending (direction, steps), then spear targets by
//! ascending (direction, steps). Search results and tests depend on it.
//!
//! The enumerators are cursors that hold no borrow of the board, so the
//! search can apply and undo a move between two calls. Every apply must be
//! undone before the cursor is advanced again.

use super::rays::ray;
use super::{Board, Move, Piece, Square, NUM_SQUARES};

/// Walks the squares reachable from one origin.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ReachCursor {
    from: Square,
    as_empty: Option<Square>,
    dir: u8,
    step: u8,
}

impl ReachCursor {
    pub(crate) fn new(from: Square, as_empty: Option<Square>) -> Self {
        ReachCursor {
            from,
            as_empty,
            dir: 0,
            step: 0,
        }
    }

    pub(crate) fn next_square(&mut self, board: &Board) -> Option<Square> {
        while self.dir < 8 {
            let squares = ray(self.from, usize::from(self.dir));
            if let Some(&sq) = squares.get(usize::from(self.step)) {
                if board.get(sq) == Piece::Empty || Some(sq) == self.as_empty {
                    self.step += 1;
                    return Some(sq);
                }
            }
            self.dir += 1;
            self.step = 0;
        }
        None
    }
}

/// Resumable enumeration of every legal move of one side.
///
/// ```
/// use amazons_engine::board::{Board, MoveCursor};
///
/// let mut board = Board::new();
/// let mut cursor = MoveCursor::new(board.turn());
/// let mut count = 0;
/// while let Some(mv) = cursor.next_move(&board) {
///     board.make_move(mv);
///     count += 1;
///     board.undo();
/// }
/// assert_eq!(count, 2176);
/// ```
#[derive(Clone, Debug)]
pub struct MoveCursor {
    side: Piece,
    next_origin: usize,
    archer: Option<(Square, ReachCursor)>,
    landing: Option<(Square, ReachCursor)>,
}

impl MoveCursor {
    #[must_use]
    pub fn new(side: Piece) -> Self {
        MoveCursor {
            side,
            next_origin: 0,
            archer: None,
            landing: None,
        }
    }

    /// The next legal move, or `None` once all have been produced.
    pub fn next_move(&mut self, board: &Board) -> Option<Move> {
        loop {
            if let Some((to, spears)) = &mut self.landing {
                if let Some(spear) = spears.next_square(board) {
                    let (from, _) = self.archer?;
                    return Some(Move::new(from, *to, spear));
                }
                self.landing = None;
            }

            if let Some((from, destinations)) = &mut self.archer {
                if let Some(to) = destinations.next_square(board) {
                    self.landing = Some((to, ReachCursor::new(to, Some(*from))));
                    continue;
                }
                self.archer = None;
            }

            let side = self.side;
            let from = (self.next_origin..NUM_SQUARES)
                .map(Square::from_index)
                .find(|&sq| board.get(sq) == side);
            let Some(from) = from else {
                self.next_origin = NUM_SQUARES;
                return None;
            };
            self.next_origin = from.index() + 1;
            self.archer = Some((from, ReachCursor::new(from, None)));
        }
    }
}

/// Iterator over squares reachable from an origin; see [`Board::reachable_from`].
pub struct ReachableFrom<'a> {
    board: &'a Board,
    cursor: ReachCursor,
}

impl Iterator for ReachableFrom<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        self.cursor.next_square(self.board)
    }
}

/// Iterator over legal moves; see [`Board::legal_moves`].
pub struct LegalMoves<'a> {
    board: &'a Board,
    cursor: MoveCursor,
}

impl Iterator for LegalMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.cursor.next_move(self.board)
    }
}

impl Board {
    /// Squares reachable from `from` by an unblocked queen move, treating
    /// `as_empty` (if any) as empty. Ignores what stands on `from` itself.
    pub fn reachable_from(&self, from: Square, as_empty: Option<Square>) -> ReachableFrom<'_> {
        ReachableFrom {
            board: self,
            cursor: ReachCursor::new(from, as_empty),
        }
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> LegalMoves<'_> {
        self.legal_moves_for(self.turn)
    }

    /// Legal moves for `side`, whoever is to move.
    pub fn legal_moves_for(&self, side: Piece) -> LegalMoves<'_> {
        LegalMoves {
            board: self,
            cursor: MoveCursor::new(side),
        }
    }

    pub fn has_legal_move(&self, side: Piece) -> bool {
        self.legal_moves_for(side).next().is_some()
    }

    /// Number of legal moves for `side`.
    pub fn mobility(&self, side: Piece) -> usize {
        self.legal_moves_for(side).count()
    }
}
