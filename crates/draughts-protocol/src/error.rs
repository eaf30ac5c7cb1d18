//! Protocol errors.

use draughts_core::{MoveParseError, NotationError, Player};
use draughts_engine::SearchError;

/// Errors that can occur while handling protocol input.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The `position` command is missing `start` or a board.
    #[error("malformed position command: expected `start` or a board")]
    MalformedPosition,

    /// The board in a `position` command did not parse.
    #[error("invalid board {notation}: {source}")]
    InvalidNotation {
        /// The rejected board text.
        notation: String,
        #[source]
        source: NotationError,
    },

    /// A turn after `moves` did not parse.
    #[error("invalid turn {text}: {source}")]
    InvalidTurn {
        /// The rejected turn text.
        text: String,
        #[source]
        source: MoveParseError,
    },

    /// A well-formed turn that the side to move cannot play.
    #[error("illegal turn {turn} for {side}")]
    IllegalTurn { turn: String, side: Player },

    /// A keyword was given without its value.
    #[error("missing value for {param}")]
    MissingValue { param: String },

    /// A value did not parse.
    #[error("invalid value for {param}: {value}")]
    InvalidValue { param: String, value: String },

    /// `setoption` named an option the engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption { name: String },

    #[error(transparent)]
    Search(#[from] SearchError),

    /// An I/O error while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
