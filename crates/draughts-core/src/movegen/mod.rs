//! Legal move generation.

mod chain;
mod jumps;
mod steps;

use crate::board::Board;
use crate::moves::Move;
use crate::player::Player;

use self::jumps::gen_jumps;
use self::steps::gen_steps;

pub use self::chain::{jump_chains, legal_turns};

/// Capacity of a [`MoveList`]: 32 pieces times 4 diagonals.
const MAX_MOVES: usize = 128;

/// Stack-allocated buffer for generated moves.
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::new(0, 0, 0, 0); MAX_MOVES],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < MAX_MOVES);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return `true` if `mv` is in the list.
    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate all legal moves for `player`.
///
/// If any of the player's pieces can jump, only jumps are returned (forced
/// capture). Otherwise every simple diagonal step is returned. Squares are
/// scanned in row-major order. Returns `None` when the player cannot move.
pub fn legal_moves(board: &Board, player: Player) -> Option<MoveList> {
    let mut jumps = MoveList::new();
    let mut steps = MoveList::new();

    for (row, col) in Board::playable_squares() {
        if !board.cell_at(row, col).belongs_to(player) {
            continue;
        }
        gen_jumps(board, player, row, col, &mut jumps);
        // Steps are pointless once any capture has turned up.
        if jumps.is_empty() {
            gen_steps(board, player, row, col, &mut steps);
        }
    }

    let list = if jumps.is_empty() { steps } else { jumps };
    (!list.is_empty()).then_some(list)
}

/// Generate the legal jumps for the piece of `player` standing on `(row, col)`.
///
/// Returns `None` if the square does not hold one of the player's pieces or
/// the piece has no jump.
pub fn legal_jumps_from(board: &Board, player: Player, row: u8, col: u8) -> Option<MoveList> {
    if !Board::is_playable(row, col) || !board.cell_at(row, col).belongs_to(player) {
        return None;
    }
    let mut jumps = MoveList::new();
    gen_jumps(board, player, row, col, &mut jumps);
    (!jumps.is_empty()).then_some(jumps)
}

/// Diagonal directions a piece may travel: forward-left, forward-right, then,
/// for kings, backward-left and backward-right.
#[inline]
fn directions(player: Player, king: bool) -> &'static [(i8, i8)] {
    const RED: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
    const BLACK: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];
    let all = match player {
        Player::Red => &RED,
        Player::Black => &BLACK,
    };
    if king { &all[..] } else { &all[..2] }
}
