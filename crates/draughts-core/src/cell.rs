//! Contents of a single board square.

use std::fmt;

use crate::player::Player;

/// What occupies a square: nothing, or a man or king of either side.
///
/// The discriminants match the integer encoding used at the engine boundary
/// (0 empty, 1 red man, 2 red king, 3 black man, 4 black king).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    RedMan = 1,
    RedKing = 2,
    BlackMan = 3,
    BlackKing = 4,
}

impl Cell {
    /// All cell values in code order.
    pub const ALL: [Cell; 5] = [
        Cell::Empty,
        Cell::RedMan,
        Cell::RedKing,
        Cell::BlackMan,
        Cell::BlackKing,
    ];

    /// The man belonging to `player`.
    #[inline]
    pub const fn man(player: Player) -> Cell {
        match player {
            Player::Red => Cell::RedMan,
            Player::Black => Cell::BlackMan,
        }
    }

    /// Return the owner of the piece, or `None` for an empty square.
    #[inline]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::RedMan | Cell::RedKing => Some(Player::Red),
            Cell::BlackMan | Cell::BlackKing => Some(Player::Black),
        }
    }

    /// Return `true` if the square holds a piece of `player`.
    #[inline]
    pub const fn belongs_to(self, player: Player) -> bool {
        matches!(
            (self, player),
            (Cell::RedMan | Cell::RedKing, Player::Red)
                | (Cell::BlackMan | Cell::BlackKing, Player::Black)
        )
    }

    /// Return `true` for an empty square.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Return `true` for a king of either side.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::RedKing | Cell::BlackKing)
    }

    /// Return `true` for a man of either side.
    #[inline]
    pub const fn is_man(self) -> bool {
        matches!(self, Cell::RedMan | Cell::BlackMan)
    }

    /// Promote a man to a king. Kings and empty squares are unchanged.
    #[inline]
    pub const fn crowned(self) -> Cell {
        match self {
            Cell::RedMan => Cell::RedKing,
            Cell::BlackMan => Cell::BlackKing,
            other => other,
        }
    }

    /// The same piece kind for the opposing side.
    #[inline]
    pub const fn swap_color(self) -> Cell {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::RedMan => Cell::BlackMan,
            Cell::RedKing => Cell::BlackKing,
            Cell::BlackMan => Cell::RedMan,
            Cell::BlackKing => Cell::RedKing,
        }
    }

    /// Return the boundary integer code (0..=4).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a boundary integer code, returning `None` outside 0..=4.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::RedMan),
            2 => Some(Cell::RedKing),
            3 => Some(Cell::BlackMan),
            4 => Some(Cell::BlackKing),
            _ => None,
        }
    }

    /// Parse a notation character (`r`, `R`, `b`, `B`, or `.` for empty).
    #[inline]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'r' => Some(Cell::RedMan),
            'R' => Some(Cell::RedKing),
            'b' => Some(Cell::BlackMan),
            'B' => Some(Cell::BlackKing),
            _ => None,
        }
    }

    /// Return the notation character. Kings are uppercase.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::RedMan => 'r',
            Cell::RedKing => 'R',
            Cell::BlackMan => 'b',
            Cell::BlackKing => 'B',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Empty => "Empty",
            Cell::RedMan => "RedMan",
            Cell::RedKing => "RedKing",
            Cell::BlackMan => "BlackMan",
            Cell::BlackKing => "BlackKing",
        };
        f.write_str(name)
    }
}
