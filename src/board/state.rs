use std::cell::Cell;

use super::{Move, Piece, Square, NUM_SQUARES};

/// Memoized result of [`Board::winner`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WinnerCache {
    /// Position changed since the last query
    Stale,
    /// `None` while the game is running, otherwise the winning side
    Known(Option<Piece>),
}

/// One entry of the move history, enough to reverse the move exactly.
#[derive(Clone, Copy, Debug)]
pub struct UnmakeInfo {
    pub(crate) mv: Move,
    pub(crate) previous_winner: WinnerCache,
}

impl UnmakeInfo {
    /// The move that was applied
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }
}

/// Amazons game state: square occupancy, side to move and move history.
///
/// The board is only mutated through [`Board::put`], [`Board::make_move`]
/// and [`Board::undo`]. `Clone` produces a fully independent copy, so a
/// search can run on its own board while the original stays untouched.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [Piece; NUM_SQUARES],
    pub(crate) turn: Piece,
    pub(crate) history: Vec<UnmakeInfo>,
    pub(crate) winner: Cell<WinnerCache>,
}

/// Starting squares `(col, row)` of the Light archers.
const LIGHT_START: [(usize, usize); 4] = [(3, 0), (6, 0), (0, 3), (9, 3)];
/// Starting squares `(col, row)` of the Dark archers.
const DARK_START: [(usize, usize); 4] = [(3, 9), (6, 9), (0, 6), (9, 6)];

impl Board {
    /// The standard initial position, Light to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, row) in LIGHT_START {
            board.cells[Square::sq(col, row).index()] = Piece::Light;
        }
        for (col, row) in DARK_START {
            board.cells[Square::sq(col, row).index()] = Piece::Dark;
        }
        board
    }

    /// A board with no pieces at all, Light to move.
    pub fn empty() -> Self {
        Board {
            cells: [Piece::Empty; NUM_SQUARES],
            turn: Piece::Light,
            history: Vec::new(),
            winner: Cell::new(WinnerCache::Stale),
        }
    }

    /// The side to move (`Light` or `Dark`)
    pub fn turn(&self) -> Piece {
        self.turn
    }

    /// Set the side to move. Used when setting up positions.
    ///
    /// # Panics
    /// Panics if `side` is not `Light` or `Dark`.
    pub fn set_turn(&mut self, side: Piece) {
        assert!(side.is_side(), "side to move must be Light or Dark");
        self.turn = side;
        self.invalidate_winner();
        self.invalidate_history_winners();
    }

    /// Number of moves applied and not undone
    pub fn num_moves(&self) -> usize {
        self.history.len()
    }

    /// Applied moves, oldest first
    pub fn history(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|info| info.mv)
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|info| info.mv)
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Piece {
        self.cells[sq.index()]
    }

    /// Contents of `(col, row)`.
    ///
    /// # Panics
    /// Panics if the coordinates are off the board.
    pub fn get_at(&self, col: usize, row: usize) -> Piece {
        self.get(Square::sq(col, row))
    }

    /// Overwrite a square. Invalidates the cached game result.
    pub fn put(&mut self, piece: Piece, sq: Square) {
        self.cells[sq.index()] = piece;
        self.invalidate_winner();
        self.invalidate_history_winners();
    }

    /// Overwrite `(col, row)`.
    ///
    /// # Panics
    /// Panics if the coordinates are off the board.
    pub fn put_at(&mut self, piece: Piece, col: usize, row: usize) {
        self.put(piece, Square::sq(col, row));
    }

    /// The winning side, or `None` while the game is still running.
    ///
    /// The side to move loses when it has no legal move. The answer is
    /// memoized until the position next changes.
    pub fn winner(&self) -> Option<Piece> {
        if let WinnerCache::Known(winner) = self.winner.get() {
            return winner;
        }
        let winner = if self.has_legal_move(self.turn) {
            None
        } else {
            Some(self.turn.opponent())
        };
        self.winner.set(WinnerCache::Known(winner));
        winner
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Squares currently holding `piece`, ascending index order.
    pub fn squares_with(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        Square::ALL
            .into_iter()
            .filter(move |&sq| self.cells[sq.index()] == piece)
    }

    #[inline]
    pub(crate) fn invalidate_winner(&mut self) {
        self.winner.set(WinnerCache::Stale);
    }

    /// Results cached before an edit no longer describe the positions an
    /// undo would return to.
    fn invalidate_history_winners(&mut self) {
        for info in &mut self.history {
            info.previous_winner = WinnerCache::Stale;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
            && self.turn == other.turn
            && self.history().eq(other.history())
    }
}

impl Eq for Board {}
