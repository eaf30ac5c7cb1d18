//! Static evaluation.

pub mod material;
pub mod terminal;
pub mod weights;

use draughts_core::{Board, Player};

pub use terminal::is_terminal;
pub use weights::Weights;

/// Static scorer bound to one maximizing side.
///
/// The search and the evaluator must agree on who maximizes, so a
/// [`Searcher`](crate::Searcher) builds its evaluator from its own config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    maximizer: Player,
    weights: Weights,
}

impl Evaluator {
    /// Evaluator with the reference weights.
    pub const fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            weights: Weights::REFERENCE,
        }
    }

    /// Replace the weight table.
    pub const fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// The side whose advantage is positive.
    pub const fn maximizer(&self) -> Player {
        self.maximizer
    }

    /// Score `board` from the maximizer's point of view.
    pub fn score(&self, board: &Board) -> i32 {
        material::material(board, self.maximizer, &self.weights)
            + terminal::elimination(board, self.maximizer, &self.weights)
    }
}

impl Default for Evaluator {
    /// Black maximizes, as the computer side of the reference setup.
    fn default() -> Self {
        Self::new(Player::Black)
    }
}

/// Score `board` with the default evaluator (Black maximizes).
pub fn evaluate(board: &Board) -> i32 {
    Evaluator::default().score(board)
}
