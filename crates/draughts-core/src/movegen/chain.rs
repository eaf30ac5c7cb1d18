//! Expansion of capture sequences into complete turns.

use tracing::trace;

use crate::board::Board;
use crate::movegen::{legal_jumps_from, legal_moves};
use crate::moves::Move;
use crate::player::Player;
use crate::turn::Turn;

/// Expand `first` into every complete turn that starts with it.
///
/// A simple step is already complete. A jump continues for as long as the
/// jumping piece can capture again from its landing square; every fork yields
/// a separate turn, in generation order. A man that is crowned by a jump ends
/// its turn there.
pub fn jump_chains(board: &Board, first: Move) -> Vec<Turn> {
    let mut turns = Vec::new();
    extend(board, Turn::single(first), &mut turns);
    turns
}

/// Every complete turn available to `player`, in legal-move order.
pub fn legal_turns(board: &Board, player: Player) -> Vec<Turn> {
    let Some(moves) = legal_moves(board, player) else {
        return Vec::new();
    };
    moves
        .as_slice()
        .iter()
        .flat_map(|&mv| jump_chains(board, mv))
        .collect()
}

/// `board` is the position before the last segment of `turn` is played.
fn extend(board: &Board, turn: Turn, out: &mut Vec<Turn>) {
    let last = turn.last();
    let mut next = *board;
    let crowned = next.apply_move(last);

    if !last.is_jump() || crowned {
        out.push(turn);
        return;
    }

    let (row, col) = last.dest();
    let continuations = next
        .cell_at(row, col)
        .owner()
        .and_then(|owner| legal_jumps_from(&next, owner, row, col));

    match continuations {
        None => out.push(turn),
        Some(jumps) => {
            if jumps.len() > 1 {
                trace!(%turn, branches = jumps.len(), "capture chain forks");
            }
            for &jump in &jumps {
                extend(&next, turn.extended(jump), out);
            }
        }
    }
}
