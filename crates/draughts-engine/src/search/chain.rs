//! Applying turns and choosing between forked capture chains.

use draughts_core::{Board, Move, Player, Turn, jump_chains};
use tracing::trace;

use crate::search::alphabeta::{INF, SearchContext, max_node, min_node};

/// Play `turn` on a copy of `board` and return the copy.
///
/// Every segment relocates the piece, removes the jumped piece and crowns a
/// man reaching its promotion row. The input board is left untouched.
pub fn simulate(board: &Board, turn: &Turn) -> Board {
    let mut next = *board;
    next.apply_turn(turn);
    next
}

/// Play `mv` for `mover` at `ply`, resolving the whole capture chain.
///
/// A single chain is forced. When the chain forks, each complete branch is
/// scored by the opponent's node one ply deeper with a full window and the
/// mover keeps the best one for itself (first on ties).
pub(super) fn play(
    board: &Board,
    mv: Move,
    mover: Player,
    ply: u8,
    ctx: &mut SearchContext<'_>,
) -> (Board, Turn) {
    let mut chains = jump_chains(board, mv).into_iter();
    let Some(first) = chains.next() else {
        let turn = Turn::single(mv);
        return (simulate(board, &turn), turn);
    };

    let first_board = simulate(board, &first);
    if chains.len() == 0 {
        return (first_board, first);
    }

    trace!(%mv, branches = chains.len() + 1, ply, "resolving chain fork");

    let maximizing = mover == ctx.maximizer();
    let mut best_score = reply_score(&first_board, maximizing, ply, ctx);
    let mut best = (first_board, first);

    for turn in chains {
        let child = simulate(board, &turn);
        let score = reply_score(&child, maximizing, ply, ctx);
        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best = (child, turn);
        }
    }

    best
}

/// Value of `child` with the opponent of the mover to play.
fn reply_score(child: &Board, maximizing: bool, ply: u8, ctx: &mut SearchContext<'_>) -> i32 {
    if maximizing {
        min_node(child, -INF, INF, ply + 1, ctx)
    } else {
        max_node(child, -INF, INF, ply + 1, ctx)
    }
}

#[cfg(test)]
mod tests {
    use draughts_core::{Board, Cell, Move, Player, Turn};

    use super::*;
    use crate::eval::Evaluator;

    fn board_with(pieces: &[(u8, u8, Cell)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, cell) in pieces {
            board.set(row, col, cell).unwrap();
        }
        board
    }

    #[test]
    fn simulate_leaves_the_input_alone() {
        let board = Board::starting_position();
        let turn: Turn = "21-32".parse().unwrap();
        let next = simulate(&board, &turn);
        assert_eq!(board, Board::starting_position());
        assert_eq!(next.cell_at(2, 1), Cell::Empty);
        assert_eq!(next.cell_at(3, 2), Cell::BlackMan);
    }

    #[test]
    fn simulate_single_jump_removes_the_midpoint() {
        let board = board_with(&[(4, 3, Cell::BlackKing), (3, 4, Cell::RedMan), (7, 0, Cell::RedMan)]);
        let next = simulate(&board, &"43x25".parse().unwrap());
        assert_eq!(next.cell_at(3, 4), Cell::Empty);
        assert_eq!(next.cell_at(4, 3), Cell::Empty);
        assert_eq!(next.cell_at(2, 5), Cell::BlackKing);
        assert_eq!(next.piece_count(Player::Red), 1);
    }

    #[test]
    fn simulate_crowns_on_the_back_rank() {
        let board = board_with(&[(6, 1, Cell::BlackMan)]);
        let next = simulate(&board, &"61-72".parse().unwrap());
        assert_eq!(next.cell_at(7, 2), Cell::BlackKing);
    }

    #[test]
    fn forced_chain_is_played_in_full() {
        let board = board_with(&[
            (1, 2, Cell::BlackMan),
            (2, 3, Cell::RedMan),
            (4, 5, Cell::RedMan),
            (7, 0, Cell::RedMan),
        ]);
        let evaluator = Evaluator::new(Player::Black);
        let mut ctx = SearchContext {
            nodes: 0,
            depth: 4,
            evaluator: &evaluator,
        };
        let (next, turn) = play(&board, Move::new(1, 2, 3, 4), Player::Black, 0, &mut ctx);
        assert_eq!(turn.to_string(), "12x34x56");
        assert_eq!(next.cell_at(5, 6), Cell::BlackMan);
        assert_eq!(next.piece_count(Player::Red), 1);
        assert_eq!(ctx.nodes, 0, "forced chains need no search");
    }

    #[test]
    fn fork_prefers_the_stronger_branch_for_the_mover() {
        // After 12x34 the black man can continue over (4,3) to (5,2) or over
        // (4,5) to (5,6). Landing on (5,6) leaves it en prise to (6,7); the
        // other branch is safe.
        let board = board_with(&[
            (1, 2, Cell::BlackMan),
            (2, 3, Cell::RedMan),
            (4, 3, Cell::RedMan),
            (4, 5, Cell::RedMan),
            (6, 7, Cell::RedMan),
        ]);
        let evaluator = Evaluator::new(Player::Black);
        let mut ctx = SearchContext {
            nodes: 0,
            depth: 2,
            evaluator: &evaluator,
        };
        let (next, turn) = play(&board, Move::new(1, 2, 3, 4), Player::Black, 0, &mut ctx);
        assert_eq!(turn.to_string(), "12x34x52");
        assert_eq!(next.cell_at(5, 2), Cell::BlackMan);
        assert!(ctx.nodes > 0);
    }

    #[test]
    fn minimizer_resolves_forks_against_the_maximizer() {
        // Colour-mirrored fork with Red to move: Red avoids the branch that
        // hands Black a recapture.
        let board = board_with(&[
            (6, 5, Cell::RedMan),
            (5, 4, Cell::BlackMan),
            (3, 4, Cell::BlackMan),
            (3, 2, Cell::BlackMan),
            (1, 0, Cell::BlackMan),
        ]);
        let evaluator = Evaluator::new(Player::Black);
        let mut ctx = SearchContext {
            nodes: 0,
            depth: 2,
            evaluator: &evaluator,
        };
        let (_, turn) = play(&board, Move::new(6, 5, 4, 3), Player::Red, 0, &mut ctx);
        assert_eq!(turn.to_string(), "65x43x25");
    }
}
