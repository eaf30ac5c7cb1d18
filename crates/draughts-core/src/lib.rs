//! Core draughts types: board representation, move generation, and game rules.

mod board;
mod cell;
mod error;
mod moves;
mod notation;
mod player;
mod turn;

pub mod movegen;
pub mod perft;

pub use board::{Board, PrettyBoard};
pub use cell::Cell;
pub use error::{BoardError, MoveParseError, NotationError};
pub use movegen::{MoveList, jump_chains, legal_jumps_from, legal_moves, legal_turns};
pub use moves::Move;
pub use notation::STARTING_POSITION;
pub use player::Player;
pub use turn::Turn;
