//! Capture generation for a single piece.

use crate::board::Board;
use crate::movegen::{MoveList, directions};
use crate::moves::Move;
use crate::player::Player;

/// Push every jump available to the piece of `player` on `(row, col)`.
///
/// A jump needs an opponent man or king on the adjacent diagonal square and
/// an empty square directly beyond it.
pub(super) fn gen_jumps(board: &Board, player: Player, row: u8, col: u8, list: &mut MoveList) {
    let piece = board.cell_at(row, col);
    let opponent = player.flip();

    for &(dr, dc) in directions(player, piece.is_king()) {
        let Some((over_row, over_col)) = Board::offset(row, col, dr, dc) else {
            continue;
        };
        if !board.cell_at(over_row, over_col).belongs_to(opponent) {
            continue;
        }
        let Some((to_row, to_col)) = Board::offset(row, col, 2 * dr, 2 * dc) else {
            continue;
        };
        if board.cell_at(to_row, to_col).is_empty() {
            list.push(Move::new(row, col, to_row, to_col));
        }
    }
}
