//! The two sides of a draughts game.

use std::fmt;
use std::ops::Not;

/// A side: Red or Black.
///
/// Red advances toward row 0, Black toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    Red = 0,
    Black = 1,
}

impl Player {
    /// Both players, Red first.
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    /// Return the opposing player.
    #[inline]
    pub const fn flip(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    /// Row delta of a forward step for this player's men.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }

    /// The row on which this player's men are crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Player::Red => 0,
            Player::Black => 7,
        }
    }

    /// Parse a player name (`red`, `r`, `black`, `b`), case-insensitive.
    pub fn from_name(name: &str) -> Option<Player> {
        match name.to_ascii_lowercase().as_str() {
            "red" | "r" => Some(Player::Red),
            "black" | "b" => Some(Player::Black),
            _ => None,
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.flip()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "red"),
            Player::Black => write!(f, "black"),
        }
    }
}
