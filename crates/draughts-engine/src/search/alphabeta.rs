//! Depth-limited alpha-beta minimax.
//!
//! The maximizing side moves at even plies, the minimizing side at odd ones.
//! Scores are always from the maximizer's perspective.

use draughts_core::{Board, MoveList, Player, legal_moves};

use crate::eval::{Evaluator, is_terminal};
use crate::search::chain::play;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Mutable state threaded through one search.
pub(super) struct SearchContext<'a> {
    /// Nodes visited, including nested chain searches.
    pub nodes: u64,
    /// Plies below the root at which the search stops.
    pub depth: u8,
    pub evaluator: &'a Evaluator,
}

impl SearchContext<'_> {
    pub fn maximizer(&self) -> Player {
        self.evaluator.maximizer()
    }

    pub fn minimizer(&self) -> Player {
        self.evaluator.maximizer().flip()
    }

    /// Moves to search at this node, or `None` if it is a leaf.
    fn expand(&self, board: &Board, player: Player, ply: u8) -> Option<MoveList> {
        if ply >= self.depth || is_terminal(board) {
            return None;
        }
        legal_moves(board, player)
    }
}

/// Node where the maximizer is to move.
pub(super) fn max_node(
    board: &Board,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    let player = ctx.maximizer();
    let Some(moves) = ctx.expand(board, player, ply) else {
        return ctx.evaluator.score(board);
    };

    let mut best = -INF;
    for &mv in &moves {
        let (child, _) = play(board, mv, player, ply, ctx);
        best = best.max(min_node(&child, alpha, beta, ply + 1, ctx));
        if best >= beta {
            return best;
        }
        alpha = alpha.max(best);
    }
    best
}

/// Node where the minimizer is to move.
pub(super) fn min_node(
    board: &Board,
    alpha: i32,
    mut beta: i32,
    ply: u8,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.nodes += 1;

    let player = ctx.minimizer();
    let Some(moves) = ctx.expand(board, player, ply) else {
        return ctx.evaluator.score(board);
    };

    let mut best = INF;
    for &mv in &moves {
        let (child, _) = play(board, mv, player, ply, ctx);
        best = best.min(max_node(&child, alpha, beta, ply + 1, ctx));
        if best <= alpha {
            return best;
        }
        beta = beta.min(best);
    }
    best
}
