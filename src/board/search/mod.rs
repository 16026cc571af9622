//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Light maximizes and Dark minimizes the Light-positive score returned by
//! [`Board::evaluate`]. The search works on a single board, applying and
//! undoing moves in place, so it needs `&mut Board` for its whole run. To
//! search from several threads, give each thread its own clone.

mod simple;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::{Board, Move, Piece};
pub use super::eval::{INFINITY, WINNING_VALUE};

/// Default search depth: look at every reply one ply deep.
pub const DEFAULT_DEPTH: u32 = 1;

/// Which way a node optimizes the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sense {
    /// Light's nodes
    Maximize,
    /// Dark's nodes
    Minimize,
}

impl Sense {
    /// Sense of the nodes where `side` is to move.
    #[must_use]
    pub fn for_side(side: Piece) -> Self {
        if side == Piece::Dark {
            Sense::Minimize
        } else {
            Sense::Maximize
        }
    }

    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Sense::Maximize => Sense::Minimize,
            Sense::Minimize => Sense::Maximize,
        }
    }

    /// True iff `a` is strictly better than `b` for this side.
    #[must_use]
    pub const fn prefers(self, a: i32, b: i32) -> bool {
        match self {
            Sense::Maximize => a > b,
            Sense::Minimize => a < b,
        }
    }

    /// The score no move can do worse than.
    #[must_use]
    pub const fn worst(self) -> i32 {
        match self {
            Sense::Maximize => -INFINITY,
            Sense::Minimize => INFINITY,
        }
    }
}

/// Result of a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` if the game is already over
    pub best_move: Option<Move>,
    /// Light-positive score of `best_move`
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

/// Statistics tracked during search
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
    pub total_nodes: u64,
}

impl SearchStats {
    pub fn reset_search(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
    }
}

/// Search state persisted across searches
#[derive(Debug, Default)]
pub struct SearchState {
    pub stats: SearchStats,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Information about a completed search.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub nodes: u64,
    pub cutoffs: u64,
    pub time_ms: u64,
    pub score: i32,
    pub best_move: Option<Move>,
}

/// Callback type for search info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Configuration for a search operation.
#[derive(Clone)]
pub struct SearchConfig {
    /// Plies to search; values below 1 are treated as 1
    pub depth: u32,
    /// Node limit (0 = unlimited), checked between sibling moves
    pub node_limit: u64,
    /// Optional callback receiving the summary of each search
    pub info_callback: Option<SearchInfoCallback>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            node_limit: 0,
            info_callback: None,
        }
    }
}

impl SearchConfig {
    /// Create a depth-limited search config
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            ..Default::default()
        }
    }

    /// Set node limit
    #[must_use]
    pub fn with_nodes(mut self, node_limit: u64) -> Self {
        self.node_limit = node_limit;
        self
    }

    /// Attach a callback for search info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}

/// Search the position with the given configuration.
///
/// Setting `stop` (or exhausting the node limit) ends the search early; the
/// best root move completed so far is returned. The board is left exactly
/// as it was.
#[allow(clippy::needless_pass_by_value)] // Config is intentionally consumed
pub fn search(
    board: &mut Board,
    state: &mut SearchState,
    config: SearchConfig,
    stop: &AtomicBool,
) -> SearchResult {
    simple::simple_search(board, state, &config, stop)
}

/// Best move for the side to move at a fixed depth, or `None` if the game
/// is over.
pub fn find_best_move(board: &mut Board, depth: u32) -> Option<Move> {
    let mut state = SearchState::new();
    let stop = AtomicBool::new(false);
    search(board, &mut state, SearchConfig::depth(depth), &stop).best_move
}

/// Alpha-beta value of the position, searched `depth` plies deep.
///
/// With a window that does not contain the true value the result is only a
/// bound, as usual for alpha-beta.
pub fn alpha_beta(board: &mut Board, depth: u32, sense: Sense, alpha: i32, beta: i32) -> i32 {
    let stop = AtomicBool::new(false);
    let mut ctx = simple::SimpleSearchContext::new(board, &stop, 0);
    ctx.search(depth, sense, alpha, beta)
}
