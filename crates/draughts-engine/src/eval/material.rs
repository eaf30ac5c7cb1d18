//! Material and edge-file evaluation.
//!
//! Scores are returned from the maximizer's perspective (positive = maximizer
//! ahead).

use draughts_core::{Board, Player};

use crate::eval::weights::Weights;

/// Sum piece values for both sides, positive for `maximizer`'s pieces.
pub fn material(board: &Board, maximizer: Player, weights: &Weights) -> i32 {
    let mut score = 0;

    for (_, col, cell) in board.occupied() {
        let ours = cell.belongs_to(maximizer);
        let on_edge = col == 0 || col == 7;

        let value = if cell.is_king() {
            let base = if ours {
                weights.maximizer_king
            } else {
                weights.minimizer_king
            };
            base + if on_edge { weights.edge_king } else { 0 }
        } else {
            weights.man + if on_edge { weights.edge_man } else { 0 }
        };

        if ours {
            score += value;
        } else {
            score -= value;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use draughts_core::{Board, Player};

    use super::material;
    use crate::eval::weights::Weights;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn starting_position_is_balanced() {
        let start = Board::starting_position();
        assert_eq!(material(&start, Player::Black, &Weights::REFERENCE), 0);
        assert_eq!(material(&start, Player::Red, &Weights::REFERENCE), 0);
    }

    #[test]
    fn men_and_edge_bonus() {
        // Black man on (3,2), red man on the edge at (4,7).
        let b = board("8/8/8/2b5/7r/8/8/8");
        assert_eq!(material(&b, Player::Black, &Weights::REFERENCE), 5 - 7);
    }

    #[test]
    fn kings_are_weighted_by_role() {
        // Black king on (3,2), red king on (4,3).
        let b = board("8/8/8/2B5/3R4/8/8/8");
        assert_eq!(material(&b, Player::Black, &Weights::REFERENCE), 80 - 50);
        assert_eq!(material(&b, Player::Red, &Weights::REFERENCE), 80 - 50);
    }

    #[test]
    fn edge_kings_get_the_larger_bonus() {
        // Black king on (3,0).
        let b = board("8/8/8/B7/8/8/8/8");
        assert_eq!(material(&b, Player::Black, &Weights::REFERENCE), 84);
        assert_eq!(material(&b, Player::Red, &Weights::REFERENCE), -54);
    }

    #[test]
    fn custom_weights_apply() {
        let weights = Weights {
            man: 100,
            ..Weights::REFERENCE
        };
        let b = board("8/8/8/2b5/8/8/8/8");
        assert_eq!(material(&b, Player::Black, &weights), 100);
    }
}
