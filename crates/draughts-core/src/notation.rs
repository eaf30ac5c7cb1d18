//! Compact board notation: parsing and serialization for [`Board`].
//!
//! Rows are listed from row 0 to row 7 and separated by `/`. Within a row,
//! `r`/`R` are a red man/king, `b`/`B` a black man/king, and a digit 1-8
//! stands for that many empty squares.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::cell::Cell;
use crate::error::NotationError;

/// Notation of the standard starting position.
pub const STARTING_POSITION: &str = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1";

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Board, NotationError> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(NotationError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(NotationError::InvalidCellChar { character: c });
                    }
                    col += digit as usize;
                    continue;
                }

                let cell = Cell::from_char(c).ok_or(NotationError::InvalidCellChar { character: c })?;
                if col >= 8 {
                    return Err(NotationError::BadRowLength {
                        row,
                        length: col + 1,
                    });
                }
                board.set(row as u8, col as u8, cell)?;
                col += 1;
            }

            if col != 8 {
                return Err(NotationError::BadRowLength { row, length: col });
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            let mut empty_count = 0u8;

            for col in 0u8..8 {
                let cell = self.cell_at(row, col);
                if cell.is_empty() {
                    empty_count += 1;
                    continue;
                }
                if empty_count > 0 {
                    write!(f, "{empty_count}")?;
                    empty_count = 0;
                }
                write!(f, "{cell}")?;
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
