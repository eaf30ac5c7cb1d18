//! A full turn: one simple step, or a chain of jumps by the same piece.

use std::fmt;
use std::str::FromStr;

use crate::error::MoveParseError;
use crate::moves::{Move, parse_square};

/// A complete turn as a non-empty sequence of [`Move`] segments.
///
/// Every segment after the first starts where the previous one landed, and
/// a turn of more than one segment consists of jumps only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    segments: Vec<Move>,
}

impl Turn {
    /// A one-segment turn.
    pub fn single(mv: Move) -> Turn {
        Turn { segments: vec![mv] }
    }

    /// Return a copy of this turn with `mv` appended.
    pub(crate) fn extended(&self, mv: Move) -> Turn {
        debug_assert_eq!(self.last().dest(), mv.source());
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(mv);
        Turn { segments }
    }

    /// The opening segment, as it appears in a legal-move list.
    #[inline]
    pub fn first(&self) -> Move {
        self.segments[0]
    }

    /// The final segment.
    #[inline]
    pub fn last(&self) -> Move {
        self.segments[self.segments.len() - 1]
    }

    /// All segments in play order.
    #[inline]
    pub fn segments(&self) -> &[Move] {
        &self.segments
    }

    /// Number of segments (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Return `true` if the turn has no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Return `true` if the turn captures at least one piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.first().is_jump()
    }

    /// Squares of every piece captured along the way.
    pub fn captured_squares(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.segments.iter().filter_map(|mv| mv.jumped_square())
    }
}

impl From<Move> for Turn {
    fn from(mv: Move) -> Turn {
        Turn::single(mv)
    }
}

impl FromStr for Turn {
    type Err = MoveParseError;

    /// Parse `52-43` or a jump chain such as `52x34x16`.
    fn from_str(s: &str) -> Result<Turn, MoveParseError> {
        if !s.contains('x') {
            return s.parse::<Move>().map(Turn::single);
        }

        let squares = s
            .split('x')
            .map(parse_square)
            .collect::<Result<Vec<_>, _>>()?;
        if squares.len() < 2 {
            return Err(MoveParseError::MalformedTurn {
                text: s.to_string(),
            });
        }

        let mut segments = Vec::with_capacity(squares.len() - 1);
        for pair in squares.windows(2) {
            let ((fr, fc), (tr, tc)) = (pair[0], pair[1]);
            if fr.abs_diff(tr) != 2 || fc.abs_diff(tc) != 2 {
                return Err(MoveParseError::NotDiagonal {
                    text: s.to_string(),
                });
            }
            segments.push(Move::new(fr, fc, tr, tc));
        }

        Ok(Turn { segments })
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first())?;
        for mv in &self.segments[1..] {
            write!(f, "x{}{}", mv.to_row(), mv.to_col())?;
        }
        Ok(())
    }
}
