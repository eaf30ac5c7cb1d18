//! Game-over detection by elimination.

use draughts_core::{Board, Player};

use crate::eval::weights::Weights;

/// Return `true` if at least one side has no pieces left.
///
/// A side that still has pieces but no legal move is not detected here; the
/// search sees that as an empty move list.
pub fn is_terminal(board: &Board) -> bool {
    Player::ALL
        .into_iter()
        .any(|player| board.piece_count(player) == 0)
}

/// The elimination term: `+elimination` if the minimizer is wiped out,
/// `-elimination` if the maximizer is. Both apply on an empty board.
pub fn elimination(board: &Board, maximizer: Player, weights: &Weights) -> i32 {
    let mut score = 0;
    if board.piece_count(maximizer.flip()) == 0 {
        score += weights.elimination;
    }
    if board.piece_count(maximizer) == 0 {
        score -= weights.elimination;
    }
    score
}
