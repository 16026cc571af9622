//! Core search implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::{SearchConfig, SearchIterationInfo, SearchResult, SearchState, Sense, INFINITY};
use crate::board::{Board, Move, MoveCursor};

/// Search context for a single search
pub(crate) struct SimpleSearchContext<'a> {
    pub board: &'a mut Board,
    pub stop: &'a AtomicBool,
    pub node_limit: u64,
    pub nodes: u64,
    pub cutoffs: u64,
    stopped: bool,
}

impl<'a> SimpleSearchContext<'a> {
    pub(crate) fn new(
        board: &'a mut Board,
        stop: &'a AtomicBool,
        node_limit: u64,
    ) -> Self {
        SimpleSearchContext {
            board,
            stop,
            node_limit,
            nodes: 0,
            cutoffs: 0,
            stopped: false,
        }
    }

    fn should_stop(&mut self) -> bool {
        if !self.stopped {
            self.stopped = self.stop.load(Ordering::Relaxed)
                || (self.node_limit > 0 && self.nodes >= self.node_limit);
        }
        self.stopped
    }

    /// Alpha-beta value of the current position for `sense`.
    pub(crate) fn search(&mut self, depth: u32, sense: Sense, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if depth == 0 || self.board.winner().is_some() {
            return self.board.evaluate();
        }

        let mut score = sense.worst();
        let mut searched_any = false;
        let mut cursor = MoveCursor::new(self.board.turn());
        while let Some(mv) = cursor.next_move(self.board) {
            // Always score one child so a stopped node still returns a real value.
            if searched_any && self.should_stop() {
                break;
            }
            searched_any = true;

            self.board.make_move(mv);
            let child = self.search(depth - 1, sense.flip(), alpha, beta);
            self.board.undo();

            match sense {
                Sense::Maximize => {
                    score = score.max(child);
                    alpha = alpha.max(score);
                }
                Sense::Minimize => {
                    score = score.min(child);
                    beta = beta.min(score);
                }
            }
            if alpha >= beta {
                self.cutoffs += 1;
                break;
            }
        }
        score
    }

    /// Search every root move and keep the best one. Ties go to the move
    /// enumerated first.
    fn search_root(&mut self, depth: u32) -> (Option<Move>, i32) {
        if self.board.winner().is_some() {
            return (None, self.board.evaluate());
        }

        let sense = Sense::for_side(self.board.turn());
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best: Option<Move> = None;
        let mut best_score = sense.worst();

        let mut cursor = MoveCursor::new(self.board.turn());
        while let Some(mv) = cursor.next_move(self.board) {
            if best.is_some() && self.should_stop() {
                break;
            }

            self.board.make_move(mv);
            let score = self.search(depth - 1, sense.flip(), alpha, beta);
            self.board.undo();

            if best.is_some() && self.stopped {
                break;
            }

            #[cfg(feature = "logging")]
            log::trace!("root move {mv} scored {score}");

            if best.is_none() || sense.prefers(score, best_score) {
                best = Some(mv);
                best_score = score;
            }
            match sense {
                Sense::Maximize => alpha = alpha.max(best_score),
                Sense::Minimize => beta = beta.min(best_score),
            }
        }

        (best, best_score)
    }
}

pub(crate) fn simple_search(
    board: &mut Board,
    state: &mut SearchState,
    config: &SearchConfig,
    stop: &AtomicBool,
) -> SearchResult {
    let start = Instant::now();
    let depth = config.depth.max(1);

    state.stats.reset_search();
    let mut ctx = SimpleSearchContext::new(board, stop, config.node_limit);
    let (best_move, score) = ctx.search_root(depth);
    let nodes = ctx.nodes;
    let cutoffs = ctx.cutoffs;

    state.stats.nodes = nodes;
    state.stats.cutoffs = cutoffs;
    state.stats.total_nodes += nodes;

    let time_ms = start.elapsed().as_millis() as u64;

    #[cfg(feature = "logging")]
    log::debug!(
        "depth {depth} score {score} nodes {nodes} cutoffs {cutoffs} time {time_ms}ms best {}",
        best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string())
    );

    if let Some(callback) = &config.info_callback {
        callback(&SearchIterationInfo {
            depth,
            nodes,
            cutoffs,
            time_ms,
            score,
            best_move,
        });
    }

    SearchResult {
        best_move,
        score,
        nodes,
    }
}
