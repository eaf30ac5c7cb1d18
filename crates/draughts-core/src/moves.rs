//! A single diagonal step or jump.

use std::fmt;
use std::str::FromStr;

use crate::error::MoveParseError;

/// One diagonal step or jump from `(from_row, from_col)` to `(to_row, to_col)`.
///
/// Whether a move is a capture is derived from its geometry: a jump spans two
/// rows and removes the piece on the midpoint square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from_row: u8,
    from_col: u8,
    to_row: u8,
    to_col: u8,
}

impl Move {
    /// Create a move. All coordinates must be in `0..8`.
    #[inline]
    pub const fn new(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Move {
        debug_assert!(from_row < 8 && from_col < 8 && to_row < 8 && to_col < 8);
        Move {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    #[inline]
    pub const fn from_row(self) -> u8 {
        self.from_row
    }

    #[inline]
    pub const fn from_col(self) -> u8 {
        self.from_col
    }

    #[inline]
    pub const fn to_row(self) -> u8 {
        self.to_row
    }

    #[inline]
    pub const fn to_col(self) -> u8 {
        self.to_col
    }

    /// Source square as `(row, col)`.
    #[inline]
    pub const fn source(self) -> (u8, u8) {
        (self.from_row, self.from_col)
    }

    /// Destination square as `(row, col)`.
    #[inline]
    pub const fn dest(self) -> (u8, u8) {
        (self.to_row, self.to_col)
    }

    /// Return `true` if this move leaps two rows, i.e. captures.
    #[inline]
    pub const fn is_jump(self) -> bool {
        self.from_row.abs_diff(self.to_row) == 2
    }

    /// The square of the captured piece, if this is a jump.
    #[inline]
    pub const fn jumped_square(self) -> Option<(u8, u8)> {
        if self.is_jump() {
            Some((
                (self.from_row + self.to_row) / 2,
                (self.from_col + self.to_col) / 2,
            ))
        } else {
            None
        }
    }
}

/// Parse a two-digit square such as `52`.
pub(crate) fn parse_square(text: &str) -> Result<(u8, u8), MoveParseError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(MoveParseError::MalformedSquare {
            text: text.to_string(),
        });
    }
    let (row, col) = (bytes[0] - b'0', bytes[1] - b'0');
    if row > 7 || col > 7 {
        return Err(MoveParseError::OutOfRange {
            text: text.to_string(),
        });
    }
    Ok((row, col))
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, MoveParseError> {
        let (from, to, jump) = if let Some((from, to)) = s.split_once('x') {
            (from, to, true)
        } else if let Some((from, to)) = s.split_once('-') {
            (from, to, false)
        } else {
            return Err(MoveParseError::MalformedTurn {
                text: s.to_string(),
            });
        };

        let (from_row, from_col) = parse_square(from)?;
        let (to_row, to_col) = parse_square(to)?;

        let distance = if jump { 2 } else { 1 };
        if from_row.abs_diff(to_row) != distance || from_col.abs_diff(to_col) != distance {
            return Err(MoveParseError::NotDiagonal {
                text: s.to_string(),
            });
        }

        Ok(Move::new(from_row, from_col, to_row, to_col))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{sep}{}{}",
            self.from_row, self.from_col, self.to_row, self.to_col
        )
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
