//! Move selection by alpha-beta search.

pub mod alphabeta;
pub mod chain;

use draughts_core::{Board, Move, Player, Turn};
use tracing::debug;

use crate::error::SearchError;
use crate::eval::{Evaluator, Weights};
use alphabeta::{INF, SearchContext, min_node};
use chain::play;

/// Search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched below the root.
    pub depth: u8,
    /// Side the search plays for; its advantage scores positive.
    pub maximizer: Player,
}

impl SearchConfig {
    /// Default search depth in plies.
    pub const DEFAULT_DEPTH: u8 = 12;

    pub const fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub const fn with_maximizer(mut self, maximizer: Player) -> Self {
        self.maximizer = maximizer;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            maximizer: Player::Black,
        }
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Candidate chosen at the root.
    pub best_move: Move,
    /// The complete turn played by `best_move`, chain included.
    pub turn: Turn,
    /// Minimax value of the chosen turn, from the maximizer's perspective.
    pub score: i32,
    /// Total nodes visited, nested chain searches included.
    pub nodes: u64,
    /// Depth limit the search ran with.
    pub depth: u8,
}

/// Fixed-depth alpha-beta searcher.
///
/// The searcher owns no board; every call copies the position it is given.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
    evaluator: Evaluator,
}

impl Searcher {
    /// Create a searcher whose evaluator maximizes for `config.maximizer`.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            evaluator: Evaluator::new(config.maximizer),
        }
    }

    /// Use a custom weight table.
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.evaluator = self.evaluator.with_weights(weights);
        self
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Score every candidate and return the best one.
    ///
    /// Each candidate is played on a copy of `board` (chain included) and
    /// valued by the minimizing side one ply deeper. The first candidate
    /// wins ties.
    pub fn search(&self, board: &Board, candidates: &[Move]) -> Result<SearchResult, SearchError> {
        let Some((&first, rest)) = candidates.split_first() else {
            return Err(SearchError::NoCandidates);
        };

        let root = *board;
        let maximizer = self.config.maximizer;
        let mut ctx = SearchContext {
            nodes: 0,
            depth: self.config.depth,
            evaluator: &self.evaluator,
        };

        let (child, mut best_turn) = play(&root, first, maximizer, 0, &mut ctx);
        let mut best_score = min_node(&child, -INF, INF, 1, &mut ctx);
        let mut best_move = first;

        for &mv in rest {
            let (child, turn) = play(&root, mv, maximizer, 0, &mut ctx);
            let score = min_node(&child, best_score, INF, 1, &mut ctx);
            if score > best_score {
                best_score = score;
                best_move = mv;
                best_turn = turn;
            }
        }

        debug!(
            side = %maximizer,
            depth = self.config.depth,
            candidates = candidates.len(),
            nodes = ctx.nodes,
            score = best_score,
            turn = %best_turn,
            "search finished"
        );

        Ok(SearchResult {
            best_move,
            turn: best_turn,
            score: best_score,
            nodes: ctx.nodes,
            depth: self.config.depth,
        })
    }

    /// Pick one of `candidates` to play on `board`.
    pub fn choose_move(&self, board: &Board, candidates: &[Move]) -> Result<Move, SearchError> {
        self.search(board, candidates).map(|result| result.best_move)
    }
}

#[cfg(test)]
mod tests {
    use draughts_core::{Board, Move, Player, legal_moves};

    use super::*;

    fn search_depth(board: &Board, maximizer: Player, depth: u8) -> SearchResult {
        let config = SearchConfig::default()
            .with_depth(depth)
            .with_maximizer(maximizer);
        let searcher = Searcher::new(config);
        let moves = legal_moves(board, maximizer).unwrap();
        searcher.search(board, moves.as_slice()).unwrap()
    }

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 12);
        assert_eq!(config.maximizer, Player::Black);
        assert_eq!(Searcher::default().evaluator().maximizer(), Player::Black);
    }

    #[test]
    fn evaluator_follows_the_maximizer() {
        let searcher = Searcher::new(SearchConfig::default().with_maximizer(Player::Red));
        assert_eq!(searcher.evaluator().maximizer(), Player::Red);
    }

    #[test]
    fn empty_candidates_is_an_error() {
        let searcher = Searcher::default();
        let board = Board::starting_position();
        assert_eq!(searcher.choose_move(&board, &[]), Err(SearchError::NoCandidates));
    }

    #[test]
    fn single_candidate_is_returned() {
        let searcher = Searcher::new(SearchConfig::default().with_depth(3));
        let board = Board::starting_position();
        let only = Move::new(2, 5, 3, 4);
        assert_eq!(searcher.choose_move(&board, &[only]), Ok(only));
    }

    #[test]
    fn depth_1_returns_a_legal_move() {
        let board = Board::starting_position();
        let result = search_depth(&board, Player::Black, 1);
        let moves = legal_moves(&board, Player::Black).unwrap();
        assert!(moves.contains(result.best_move));
        assert_eq!(result.depth, 1);
        assert!(result.nodes >= moves.len() as u64);
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        // Every step of the lone black king lands on an inner square.
        let board: Board = "8/8/8/2B5/8/8/8/8".parse().unwrap();
        let result = search_depth(&board, Player::Black, 1);
        assert_eq!(result.best_move, Move::new(3, 2, 4, 1));
        assert_eq!(result.score, 1080);
    }

    #[test]
    fn prefers_crowning_on_the_edge() {
        let board: Board = "8/8/8/8/8/8/1b6/6r1".parse().unwrap();
        let result = search_depth(&board, Player::Black, 1);
        assert_eq!(result.best_move, Move::new(6, 1, 7, 0));
        assert_eq!(result.score, 84 - 5);
    }

    #[test]
    fn custom_weights_change_the_choice() {
        // Penalising edge kings turns 61-70 into the worse crowning square.
        let board: Board = "8/8/8/8/8/8/1b6/6r1".parse().unwrap();
        let weights = Weights {
            edge_king: -10,
            ..Weights::REFERENCE
        };
        let searcher = Searcher::new(SearchConfig::default().with_depth(1)).with_weights(weights);
        let moves = legal_moves(&board, Player::Black).unwrap();
        let result = searcher.search(&board, moves.as_slice()).unwrap();
        assert_eq!(result.best_move, Move::new(6, 1, 7, 2));
        assert_eq!(result.score, 80 - 5);
    }

    #[test]
    fn avoids_a_losing_exchange() {
        // Advancing 34-43 walks into 52x34; 34-45 is safe.
        let board: Board = "8/8/8/4b3/8/2r5/8/8".parse().unwrap();
        let result = search_depth(&board, Player::Black, 2);
        assert_eq!(result.best_move, Move::new(3, 4, 4, 5));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn red_can_maximize() {
        // Red to move captures the black man.
        let board: Board = "8/8/8/8/3b4/4r3/8/8".parse().unwrap();
        let result = search_depth(&board, Player::Red, 1);
        assert_eq!(result.best_move, Move::new(5, 4, 3, 2));
        assert_eq!(result.score, 1005);
    }

    #[test]
    fn result_carries_the_whole_chain() {
        let board: Board = "8/2b5/3r4/8/5r2/8/8/r7".parse().unwrap();
        let result = search_depth(&board, Player::Black, 2);
        assert_eq!(result.best_move, Move::new(1, 2, 3, 4));
        assert_eq!(result.turn.to_string(), "12x34x56");
    }
}
