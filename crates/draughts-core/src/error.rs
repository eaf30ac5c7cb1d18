//! Error types for board construction, notation parsing, and move parsing.

/// Errors from placing pieces on a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A coordinate lies outside the 8x8 grid.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Row index.
        row: u8,
        /// Column index.
        col: u8,
    },
    /// A piece sits on a square where `row % 2 == col % 2`.
    #[error("square ({row}, {col}) is not playable")]
    NonPlayableSquare {
        /// Row index.
        row: u8,
        /// Column index.
        col: u8,
    },
}

/// Errors that occur when parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The notation does not describe exactly 8 rows.
    #[error("expected 8 rows, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed grid breaks a board invariant.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },
}

/// Errors that occur when parsing a move or turn such as `52-43` or `52x34x16`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// A square is not written as two digits.
    #[error("malformed square \"{text}\"")]
    MalformedSquare {
        /// The offending square text.
        text: String,
    },
    /// A coordinate digit is outside 0..=7.
    #[error("coordinate out of range in \"{text}\"")]
    OutOfRange {
        /// The offending square text.
        text: String,
    },
    /// The separator does not match the step length (`-` for steps, `x` for jumps).
    #[error("\"{text}\" is not a diagonal step or jump")]
    NotDiagonal {
        /// The offending move text.
        text: String,
    },
    /// Fewer than two squares, or a step mixed into a chain of jumps.
    #[error("malformed turn \"{text}\"")]
    MalformedTurn {
        /// The offending turn text.
        text: String,
    },
}
