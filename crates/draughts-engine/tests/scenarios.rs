//! End-to-end positions driving move generation, chains, evaluation and search.

use draughts_core::{Board, Cell, Move, Player, legal_moves};
use draughts_engine::{Evaluator, SearchConfig, Searcher, evaluate, is_terminal, simulate};

fn board_with(pieces: &[(u8, u8, Cell)]) -> Board {
    let mut board = Board::empty();
    for &(row, col, cell) in pieces {
        board.set(row, col, cell).unwrap();
    }
    board
}

fn searcher(maximizer: Player, depth: u8) -> Searcher {
    Searcher::new(
        SearchConfig::default()
            .with_depth(depth)
            .with_maximizer(maximizer),
    )
}

#[test]
fn opening_offers_seven_steps() {
    let board = Board::starting_position();
    for player in Player::ALL {
        let moves = legal_moves(&board, player).unwrap();
        assert_eq!(moves.len(), 7, "{player}");
        assert!(moves.as_slice().iter().all(|mv| !mv.is_jump()));
    }
}

#[test]
fn capture_is_the_only_legal_move() {
    // A quiet black man elsewhere may not step while the king can capture.
    let board = board_with(&[
        (4, 3, Cell::BlackKing),
        (3, 4, Cell::RedMan),
        (0, 1, Cell::BlackMan),
    ]);
    let moves = legal_moves(&board, Player::Black).unwrap();
    assert_eq!(moves.as_slice(), &[Move::new(4, 3, 2, 5)]);

    let chosen = searcher(Player::Black, 4)
        .choose_move(&board, moves.as_slice())
        .unwrap();
    assert_eq!(chosen, Move::new(4, 3, 2, 5));
}

#[test]
fn red_man_captures_forward() {
    let board = board_with(&[(4, 3, Cell::RedMan), (3, 4, Cell::BlackMan)]);
    let moves = legal_moves(&board, Player::Red).unwrap();
    assert_eq!(moves.as_slice(), &[Move::new(4, 3, 2, 5)]);
}

#[test]
fn forced_continuation_is_played_in_one_turn() {
    let board = board_with(&[
        (4, 3, Cell::BlackKing),
        (3, 4, Cell::RedMan),
        (1, 4, Cell::RedMan),
    ]);
    let moves = legal_moves(&board, Player::Black).unwrap();
    let result = searcher(Player::Black, 4)
        .search(&board, moves.as_slice())
        .unwrap();
    assert_eq!(result.turn.to_string(), "43x25x03");

    let after = simulate(&board, &result.turn);
    assert_eq!(after.cell_at(3, 4), Cell::Empty);
    assert_eq!(after.cell_at(1, 4), Cell::Empty);
    assert_eq!(after.cell_at(4, 3), Cell::Empty);
    assert_eq!(after.cell_at(0, 3), Cell::BlackKing);
    assert_eq!(after.piece_count(Player::Red), 0);
    assert_eq!(board.piece_count(Player::Red), 2, "input board is untouched");
}

#[test]
fn eliminated_side_is_terminal() {
    let no_red = board_with(&[(2, 1, Cell::BlackMan), (5, 4, Cell::BlackKing)]);
    assert!(is_terminal(&no_red));
    assert!(evaluate(&no_red) >= 1000);

    let no_black = board_with(&[(5, 0, Cell::RedMan)]);
    assert!(is_terminal(&no_black));
    assert!(evaluate(&no_black) <= -1000);
    assert!(Evaluator::new(Player::Red).score(&no_black) >= 1000);
}

#[test]
fn black_king_on_the_back_rank_moves_backward() {
    let king = board_with(&[(7, 2, Cell::BlackKing), (0, 5, Cell::RedMan)]);
    let moves = legal_moves(&king, Player::Black).unwrap();
    assert_eq!(moves.as_slice(), &[Move::new(7, 2, 6, 1), Move::new(7, 2, 6, 3)]);

    let man = board_with(&[(7, 2, Cell::BlackMan), (0, 5, Cell::RedMan)]);
    assert!(legal_moves(&man, Player::Black).is_none());
}

#[test]
fn man_reaching_the_last_row_is_crowned() {
    let board = board_with(&[(6, 3, Cell::BlackMan), (1, 0, Cell::RedMan)]);
    let moves = legal_moves(&board, Player::Black).unwrap();
    for &mv in &moves {
        let after = simulate(&board, &mv.into());
        let (row, col) = mv.dest();
        assert_eq!(after.cell_at(row, col), Cell::BlackKing);
    }

    let red = board_with(&[(1, 2, Cell::RedMan), (7, 0, Cell::BlackMan)]);
    let after = simulate(&red, &Move::new(1, 2, 0, 1).into());
    assert_eq!(after.cell_at(0, 1), Cell::RedKing);
}

#[test]
fn red_searcher_plays_for_red() {
    // 45-34 hangs the man to 23x45; 45-36 keeps it.
    let board = board_with(&[(4, 5, Cell::RedMan), (2, 3, Cell::BlackMan)]);
    let moves = legal_moves(&board, Player::Red).unwrap();
    let result = searcher(Player::Red, 2)
        .search(&board, moves.as_slice())
        .unwrap();
    assert_eq!(result.best_move, Move::new(4, 5, 3, 6));
    assert_eq!(result.score, 0);
}
