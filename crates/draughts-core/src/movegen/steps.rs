//! Non-capturing diagonal steps for a single piece.

use crate::board::Board;
use crate::movegen::{MoveList, directions};
use crate::moves::Move;
use crate::player::Player;

/// Push every one-square step available to the piece of `player` on `(row, col)`.
pub(super) fn gen_steps(board: &Board, player: Player, row: u8, col: u8, list: &mut MoveList) {
    let piece = board.cell_at(row, col);

    for &(dr, dc) in directions(player, piece.is_king()) {
        if let Some((to_row, to_col)) = Board::offset(row, col, dr, dc)
            && board.cell_at(to_row, to_col).is_empty()
        {
            list.push(Move::new(row, col, to_row, to_col));
        }
    }
}
