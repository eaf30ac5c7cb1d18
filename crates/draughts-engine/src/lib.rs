//! Evaluation and alpha-beta move selection for English draughts.

mod error;
pub mod eval;
pub mod search;

pub use error::SearchError;
pub use eval::{Evaluator, Weights, evaluate, is_terminal};
pub use search::chain::simulate;
pub use search::{SearchConfig, SearchResult, Searcher};
