//! Line-based text protocol for driving the draughts engine.

pub mod command;
pub mod engine;
pub mod error;

pub use command::{Command, GoParams, parse_command};
pub use engine::TextEngine;
pub use error::ProtocolError;
