//! Command parsing.

use draughts_core::{Board, Player, Turn, legal_turns};

use crate::error::ProtocolError;

/// Parameters for the `go` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Search to this depth instead of the configured one.
    pub depth: Option<u8>,
}

/// Board and side to move after a `position` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionInfo {
    pub board: Board,
    pub side_to_move: Player,
}

/// Options settable with `setoption name <name> value <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineOption {
    /// Default search depth in plies.
    Depth(u8),
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `newgame` -- reset to the starting position, Red to move.
    NewGame,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `position` -- set up a board, side to move and played turns.
    Position(PositionInfo),
    /// `moves` -- list the legal turns for the side to move.
    Moves,
    /// `go` -- search and report the chosen turn.
    Go(GoParams),
    /// `setoption` -- change an engine option.
    SetOption(EngineOption),
    /// `show` -- print the board.
    Show,
    /// `perft <depth>` -- count turn sequences, split by first turn.
    Perft(u8),
    /// `quit` -- exit the engine.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(Command::Unknown(String::new()));
    };

    match keyword {
        "newgame" => Ok(Command::NewGame),
        "isready" => Ok(Command::IsReady),
        "moves" => Ok(Command::Moves),
        "show" => Ok(Command::Show),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(args),
        "go" => parse_go(args),
        "setoption" => parse_setoption(args),
        "perft" => Ok(Command::Perft(parse_int(args.first(), "perft")?)),
        _ => Ok(Command::Unknown(keyword.to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position start [red|black] [moves 52-43 21-32 ...]`
/// - `position <board> [red|black] [moves ...]`
///
/// Red moves first when no side is given. Every listed turn must be legal
/// for the side to move; sides alternate after each one.
fn parse_position(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let Some((&setup, mut rest)) = tokens.split_first() else {
        return Err(ProtocolError::MalformedPosition);
    };

    let mut board = match setup {
        "start" | "startpos" => Board::starting_position(),
        "moves" => return Err(ProtocolError::MalformedPosition),
        notation => notation
            .parse()
            .map_err(|source| ProtocolError::InvalidNotation {
                notation: notation.to_string(),
                source,
            })?,
    };

    let mut side = Player::Red;
    if let Some((&name, after)) = rest.split_first()
        && let Some(player) = Player::from_name(name)
    {
        side = player;
        rest = after;
    }

    match rest.split_first() {
        None => {}
        Some((&"moves", turns)) => {
            for &text in turns {
                let turn: Turn = text.parse().map_err(|source| ProtocolError::InvalidTurn {
                    text: text.to_string(),
                    source,
                })?;
                if !legal_turns(&board, side).contains(&turn) {
                    return Err(ProtocolError::IllegalTurn {
                        turn: text.to_string(),
                        side,
                    });
                }
                board.apply_turn(&turn);
                side = side.flip();
            }
        }
        Some(_) => return Err(ProtocolError::MalformedPosition),
    }

    Ok(Command::Position(PositionInfo {
        board,
        side_to_move: side,
    }))
}

/// Parse the `go` command arguments. Unknown tokens are skipped.
fn parse_go(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let mut params = GoParams::default();

    let mut i = 0;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                params.depth = Some(parse_int(tokens.get(i + 1), "depth")?);
                i += 2;
            }
            _ => i += 1,
        }
    }

    Ok(Command::Go(params))
}

/// Parse `setoption name <name> value <value>`. Option names are
/// case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let name_at = tokens.iter().position(|&t| t == "name");
    let value_at = tokens.iter().position(|&t| t == "value");

    let name = match name_at {
        Some(start) => {
            let end = value_at.filter(|&at| at > start).unwrap_or(tokens.len());
            tokens[start + 1..end].join(" ")
        }
        None => String::new(),
    };
    if name.is_empty() {
        return Err(ProtocolError::MissingValue {
            param: "name".to_string(),
        });
    }

    let value = value_at.and_then(|at| tokens.get(at + 1));
    match name.to_ascii_lowercase().as_str() {
        "depth" => Ok(Command::SetOption(EngineOption::Depth(parse_int(value, "depth")?))),
        _ => Err(ProtocolError::UnknownOption { name }),
    }
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(token: Option<&&str>, param: &str) -> Result<T, ProtocolError> {
    let value = token.ok_or_else(|| ProtocolError::MissingValue {
        param: param.to_string(),
    })?;
    value.parse().map_err(|_| ProtocolError::InvalidValue {
        param: param.to_string(),
        value: value.to_string(),
    })
}
