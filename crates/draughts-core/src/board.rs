//! The draughts board: an 8x8 grid of cells.

use std::fmt;

use crate::cell::Cell;
use crate::error::BoardError;
use crate::moves::Move;
use crate::player::Player;
use crate::turn::Turn;

/// Complete board state.
///
/// Only playable squares (`row % 2 != col % 2`) ever hold a piece. The board
/// is a plain value: copying it is a 64-byte memcpy, and the search copies it
/// at every node.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Return the standard starting position: Black on rows 0-2, Red on rows 5-7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (row, col) in Board::playable_squares() {
            board.cells[row as usize][col as usize] = match row {
                0..=2 => Cell::man(Player::Black),
                5..=7 => Cell::man(Player::Red),
                _ => Cell::Empty,
            };
        }
        board
    }

    /// Build a board from a raw grid, validating the parity invariant.
    pub fn from_cells(cells: [[Cell; 8]; 8]) -> Result<Board, BoardError> {
        let board = Board { cells };
        board.validate()?;
        Ok(board)
    }

    /// Return `true` if `(row, col)` is on the board and may hold a piece.
    #[inline]
    pub const fn is_playable(row: u8, col: u8) -> bool {
        row < 8 && col < 8 && row % 2 != col % 2
    }

    /// Iterate over the 32 playable squares in row-major order.
    pub fn playable_squares() -> impl Iterator<Item = (u8, u8)> {
        (0u8..8).flat_map(|row| ((1 - row % 2)..8).step_by(2).map(move |col| (row, col)))
    }

    /// Offset `(row, col)` by `(dr, dc)`, returning `None` if it leaves the board.
    #[inline]
    pub const fn offset(row: u8, col: u8, dr: i8, dc: i8) -> Option<(u8, u8)> {
        let r = row as i8 + dr;
        let c = col as i8 + dc;
        if r >= 0 && r < 8 && c >= 0 && c < 8 {
            Some((r as u8, c as u8))
        } else {
            None
        }
    }

    /// Return the contents of a square.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 8 or more.
    #[inline]
    pub fn cell_at(&self, row: u8, col: u8) -> Cell {
        self.cells[row as usize][col as usize]
    }

    /// Place `cell` on a square, rejecting off-board or non-playable squares.
    ///
    /// Setting a non-playable square to [`Cell::Empty`] is allowed.
    pub fn set(&mut self, row: u8, col: u8, cell: Cell) -> Result<(), BoardError> {
        if row >= 8 || col >= 8 {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if !cell.is_empty() && !Board::is_playable(row, col) {
            return Err(BoardError::NonPlayableSquare { row, col });
        }
        self.cells[row as usize][col as usize] = cell;
        Ok(())
    }

    /// Iterate over every occupied square as `(row, col, cell)`.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, u8, Cell)> + '_ {
        Board::playable_squares()
            .map(|(row, col)| (row, col, self.cell_at(row, col)))
            .filter(|(_, _, cell)| !cell.is_empty())
    }

    /// Number of pieces (men and kings) belonging to `player`.
    pub fn piece_count(&self, player: Player) -> u32 {
        self.occupied()
            .filter(|(_, _, cell)| cell.belongs_to(player))
            .count() as u32
    }

    /// Apply a single step or jump in place. The move is assumed legal.
    ///
    /// A jump removes the piece on the midpoint square. A man landing on its
    /// promotion row is crowned. Returns `true` if the piece was crowned.
    pub fn apply_move(&mut self, mv: Move) -> bool {
        let (from_row, from_col) = mv.source();
        let (to_row, to_col) = mv.dest();

        if let Some((row, col)) = mv.jumped_square() {
            self.cells[row as usize][col as usize] = Cell::Empty;
        }

        let piece = self.cell_at(from_row, from_col);
        self.cells[from_row as usize][from_col as usize] = Cell::Empty;

        let crowned = match piece.owner() {
            Some(owner) => piece.is_man() && to_row == owner.promotion_row(),
            None => false,
        };
        self.cells[to_row as usize][to_col as usize] = if crowned { piece.crowned() } else { piece };
        crowned
    }

    /// Apply every segment of a turn in place. Returns `true` if the piece was crowned.
    pub fn apply_turn(&mut self, turn: &Turn) -> bool {
        turn.segments()
            .iter()
            .fold(false, |crowned, &mv| self.apply_move(mv) | crowned)
    }

    /// Return the board seen from the other side: rotated 180 degrees with
    /// every piece's colour swapped.
    ///
    /// Rotation keeps playable squares playable and edge files on the edge.
    pub fn swap_sides(&self) -> Board {
        let mut swapped = Board::empty();
        for (row, col, cell) in self.occupied() {
            swapped.cells[7 - row as usize][7 - col as usize] = cell.swap_color();
        }
        swapped
    }

    /// Validate that no piece stands on a non-playable square.
    pub fn validate(&self) -> Result<(), BoardError> {
        for row in 0u8..8 {
            for col in 0u8..8 {
                if !self.cell_at(row, col).is_empty() && !Board::is_playable(row, col) {
                    return Err(BoardError::NonPlayableSquare { row, col });
                }
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid with coordinates.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "   0 1 2 3 4 5 6 7")?;
        for row in 0u8..8 {
            write!(f, "{row}  ")?;
            for col in 0u8..8 {
                let c = board.cell_at(row, col).to_char();
                if col < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            if row < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
