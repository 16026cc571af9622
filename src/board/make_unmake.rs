use super::error::MoveParseError;
use super::rays::ray;
use super::state::UnmakeInfo;
use super::{Board, Move, Piece, Square};

impl Board {
    /// True iff `from -> to` is a queen move whose path is clear.
    ///
    /// Every square after `from` up to and including `to` must be empty,
    /// except `as_empty`, which counts as empty whatever it holds.
    pub fn is_unblocked_move(&self, from: Square, to: Square, as_empty: Option<Square>) -> bool {
        if !from.is_queen_move(to) {
            return false;
        }
        let path = &ray(from, from.direction(to))[..from.distance(to)];
        path.iter()
            .all(|&sq| self.get(sq) == Piece::Empty || Some(sq) == as_empty)
    }

    /// True iff `from` holds an archer of the side to move.
    pub fn is_legal_origin(&self, from: Square) -> bool {
        self.get(from) == self.turn
    }

    /// True iff the archer on `from` may move to `to`, ignoring the spear.
    pub fn is_legal_archer_move(&self, from: Square, to: Square) -> bool {
        self.is_legal_origin(from) && self.is_unblocked_move(from, to, None)
    }

    /// True iff `from-to(spear)` is legal. The spear flies from `to` and the
    /// vacated `from` square does not block it.
    pub fn is_legal(&self, from: Square, to: Square, spear: Square) -> bool {
        self.is_legal_archer_move(from, to) && self.is_unblocked_move(to, spear, Some(from))
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.is_legal(mv.from(), mv.to(), mv.spear())
    }

    /// Apply `mv` for the side to move.
    ///
    /// Illegal moves are ignored: the board is left unchanged and nothing is
    /// reported. Use [`Board::try_make_move`] to find out whether the move was
    /// applied.
    pub fn make_move(&mut self, mv: Move) {
        if !self.is_legal_move(mv) {
            #[cfg(feature = "logging")]
            log::trace!("ignoring illegal move {mv} for {}", self.turn);
            return;
        }
        self.apply(mv);
    }

    /// Apply `mv`, or report why it cannot be applied.
    ///
    /// # Errors
    /// Returns [`MoveParseError::IllegalMove`] and leaves the board untouched
    /// if `mv` is not legal in this position.
    pub fn try_make_move(&mut self, mv: Move) -> Result<(), MoveParseError> {
        if !self.is_legal_move(mv) {
            return Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            });
        }
        self.apply(mv);
        Ok(())
    }

    /// Parse `from-to(spear)` and check it is legal here.
    ///
    /// # Errors
    /// Returns the parse error, or [`MoveParseError::IllegalMove`] when the
    /// text is well formed but the move cannot be played.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let mv: Move = text.parse()?;
        if !self.is_legal_move(mv) {
            return Err(MoveParseError::IllegalMove {
                notation: mv.to_string(),
            });
        }
        Ok(mv)
    }

    fn apply(&mut self, mv: Move) {
        let previous_winner = self.winner.get();
        let archer = self.cells[mv.from().index()];

        self.cells[mv.from().index()] = Piece::Empty;
        self.cells[mv.to().index()] = archer;
        self.cells[mv.spear().index()] = Piece::Spear;

        self.history.push(UnmakeInfo {
            mv,
            previous_winner,
        });
        self.turn = self.turn.opponent();

        self.invalidate_winner();
        self.winner();
    }

    /// Take back the last move. Does nothing if no move has been made.
    pub fn undo(&mut self) {
        let Some(info) = self.history.pop() else {
            return;
        };
        let mv = info.mv;
        let archer = self.cells[mv.to().index()];

        // The spear may have been thrown back onto `from`, so clear it first.
        self.cells[mv.spear().index()] = Piece::Empty;
        self.cells[mv.to().index()] = Piece::Empty;
        self.cells[mv.from().index()] = archer;

        self.turn = self.turn.opponent();
        self.winner.set(info.previous_winner);
    }

    /// Cached game result, without computing it.
    #[cfg(test)]
    pub(crate) fn cached_winner(&self) -> super::state::WinnerCache {
        self.winner.get()
    }
}
