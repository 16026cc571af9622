//! Players and the contract through which they see the game.
//!
//! Whatever runs the game (console loop, GUI, test harness) implements
//! [`GameContext`]; players only read the board through it and hand their
//! chosen move back through [`GameContext::report_move`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{search, Board, Move, Piece, SearchConfig, SearchState};

/// The game as seen by a player.
pub trait GameContext {
    /// Current position
    fn board(&self) -> &Board;

    /// Called with the move a player has chosen.
    fn report_move(&mut self, mv: Move);
}

/// Something that picks moves.
pub trait Player {
    /// The side this player plays
    fn side(&self) -> Piece;

    /// Display name
    fn name(&self) -> &str;

    /// Choose a move for the side to move, report it through `ctx` and return
    /// its text form. Returns `None` when there is no legal move.
    fn my_move(&mut self, ctx: &mut dyn GameContext) -> Option<String>;
}

/// Player driven by the alpha-beta search.
pub struct AiPlayer {
    side: Piece,
    name: String,
    config: SearchConfig,
    state: SearchState,
    stop: Arc<AtomicBool>,
}

impl AiPlayer {
    /// Searches with the default configuration.
    #[must_use]
    pub fn new(side: Piece) -> Self {
        Self::with_config(side, SearchConfig::default())
    }

    #[must_use]
    pub fn with_config(side: Piece, config: SearchConfig) -> Self {
        AiPlayer {
            side,
            name: format!("AI(depth={})", config.depth),
            config,
            state: SearchState::new(),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that aborts a running search when set from another thread.
    #[must_use]
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    /// Statistics of the most recent search
    #[must_use]
    pub fn state(&self) -> &SearchState {
        &self.state
    }
}

impl Player for AiPlayer {
    fn side(&self) -> Piece {
        self.side
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn my_move(&mut self, ctx: &mut dyn GameContext) -> Option<String> {
        // The search mutates its board; never touch the game's own copy.
        let mut board = ctx.board().clone();
        self.stop.store(false, Ordering::Relaxed);
        let result = search(&mut board, &mut self.state, self.config.clone(), &self.stop);
        let mv = result.best_move?;
        ctx.report_move(mv);
        Some(mv.to_string())
    }
}

/// Player choosing uniformly among the legal moves.
pub struct RandomPlayer {
    side: Piece,
    rng: StdRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(side: Piece) -> Self {
        RandomPlayer {
            side,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible player for tests and benchmarks.
    #[must_use]
    pub fn with_seed(side: Piece, seed: u64) -> Self {
        RandomPlayer {
            side,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn side(&self) -> Piece {
        self.side
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn my_move(&mut self, ctx: &mut dyn GameContext) -> Option<String> {
        let moves: Vec<Move> = ctx.board().legal_moves().collect();
        let mv = *moves.choose(&mut self.rng)?;
        ctx.report_move(mv);
        Some(mv.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    struct Recorder {
        board: Board,
        reported: Vec<Move>,
    }

    impl GameContext for Recorder {
        fn board(&self) -> &Board {
            &self.board
        }

        fn report_move(&mut self, mv: Move) {
            self.reported.push(mv);
        }
    }

    #[test]
    fn test_ai_player_reports_what_it_returns() {
        let mut ctx = Recorder {
            board: Board::new(),
            reported: Vec::new(),
        };
        let mut player = AiPlayer::new(Piece::Light);
        let text = player.my_move(&mut ctx).unwrap();
        assert_eq!(ctx.reported.len(), 1);
        assert_eq!(ctx.reported[0].to_string(), text);
        assert!(ctx.board.is_legal_move(ctx.reported[0]));
        assert_eq!(ctx.board, Board::new(), "search must not touch the game board");
        assert_eq!(player.state().stats.nodes, 2176);
    }

    #[test]
    fn test_random_player_is_reproducible() {
        let pick = |seed| {
            let mut ctx = Recorder {
                board: Board::new(),
                reported: Vec::new(),
            };
            RandomPlayer::with_seed(Piece::Light, seed).my_move(&mut ctx)
        };
        assert_eq!(pick(7), pick(7));
        assert!(pick(7).is_some());
    }

    #[test]
    fn test_no_move_when_game_over() {
        let mut board = Board::empty();
        board.put(Piece::Dark, Square::sq(5, 5));
        let mut ctx = Recorder {
            board,
            reported: Vec::new(),
        };
        assert_eq!(AiPlayer::new(Piece::Light).my_move(&mut ctx), None);
        assert_eq!(RandomPlayer::with_seed(Piece::Light, 1).my_move(&mut ctx), None);
        assert!(ctx.reported.is_empty());
    }
}
