//! Synchronous command loop.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use draughts_core::perft::{divide, perft};
use draughts_core::{Board, Player, legal_moves, legal_turns};
use draughts_engine::{SearchConfig, Searcher};

use crate::command::{Command, EngineOption, GoParams, PositionInfo, parse_command};
use crate::error::ProtocolError;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy)]
struct EngineConfig {
    /// Search depth used by a bare `go`.
    depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: SearchConfig::DEFAULT_DEPTH,
        }
    }
}

/// The text engine, holding the current position.
///
/// Each `go` searches on behalf of the side to move and reports its turn; the
/// position itself only changes through `position` and `newgame`.
#[derive(Debug)]
pub struct TextEngine {
    board: Board,
    side_to_move: Player,
    config: EngineConfig,
}

impl TextEngine {
    /// Create a new engine with the starting position, Red to move.
    pub fn new() -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Player::Red,
            config: EngineConfig::default(),
        }
    }

    /// Run the command loop on stdin and stdout until `quit` or end of input.
    pub fn run(mut self) -> Result<(), ProtocolError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout.lock())
    }

    /// Run the command loop over arbitrary input and output.
    pub fn run_with<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<(), ProtocolError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, output)?,
                Err(e) => warn!(error = %e, "command rejected"),
            }
            output.flush()?;
        }

        info!("draughts shutting down");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), ProtocolError> {
        match cmd {
            Command::NewGame => self.handle_newgame(),
            Command::IsReady => writeln!(out, "readyok")?,
            Command::Position(info) => self.handle_position(info),
            Command::Moves => self.handle_moves(out)?,
            Command::Go(params) => self.handle_go(params, out)?,
            Command::SetOption(option) => self.handle_setoption(option),
            Command::Show => self.handle_show(out)?,
            Command::Perft(depth) => self.handle_perft(depth, out)?,
            Command::Quit => {}
            Command::Unknown(word) => {
                if !word.is_empty() {
                    debug!(%word, "ignoring unknown command");
                }
            }
        }
        Ok(())
    }

    fn handle_newgame(&mut self) {
        self.board = Board::starting_position();
        self.side_to_move = Player::Red;
    }

    fn handle_position(&mut self, info: PositionInfo) {
        self.board = info.board;
        self.side_to_move = info.side_to_move;
    }

    fn handle_setoption(&mut self, option: EngineOption) {
        match option {
            EngineOption::Depth(depth) => {
                self.config.depth = depth;
                info!(depth, "search depth set");
            }
        }
    }

    fn handle_moves<W: Write>(&self, out: &mut W) -> Result<(), ProtocolError> {
        let turns = legal_turns(&self.board, self.side_to_move);
        if turns.is_empty() {
            writeln!(out, "moves none")?;
            return Ok(());
        }
        let listed: Vec<String> = turns.iter().map(ToString::to_string).collect();
        writeln!(out, "moves {}", listed.join(" "))?;
        Ok(())
    }

    fn handle_go<W: Write>(&self, params: GoParams, out: &mut W) -> Result<(), ProtocolError> {
        let Some(moves) = legal_moves(&self.board, self.side_to_move) else {
            info!(side = %self.side_to_move, "no legal moves");
            writeln!(out, "bestmove none")?;
            return Ok(());
        };

        let config = SearchConfig::default()
            .with_depth(params.depth.unwrap_or(self.config.depth))
            .with_maximizer(self.side_to_move);
        let result = Searcher::new(config).search(&self.board, moves.as_slice())?;

        writeln!(
            out,
            "info depth {} score {} nodes {}",
            result.depth, result.score, result.nodes
        )?;
        writeln!(out, "bestmove {}", result.turn)?;
        Ok(())
    }

    fn handle_perft<W: Write>(&self, depth: u8, out: &mut W) -> Result<(), ProtocolError> {
        let split = divide(&self.board, self.side_to_move, depth as usize);
        let total: u64 = if split.is_empty() {
            perft(&self.board, self.side_to_move, depth as usize)
        } else {
            split.iter().map(|(_, nodes)| nodes).sum()
        };
        for (turn, nodes) in &split {
            writeln!(out, "{turn}: {nodes}")?;
        }
        writeln!(out, "nodes {total}")?;
        debug!(depth, total, "perft finished");
        Ok(())
    }

    fn handle_show<W: Write>(&self, out: &mut W) -> Result<(), ProtocolError> {
        writeln!(out, "{}", self.board.pretty())?;
        writeln!(out, "board {}", self.board)?;
        writeln!(out, "side {}", self.side_to_move)?;
        Ok(())
    }
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}
