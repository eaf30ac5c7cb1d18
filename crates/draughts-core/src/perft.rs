//! Perft (performance test) for move generation correctness verification.
//!
//! A node is a complete turn: a multi-jump counts once per distinct path.

use crate::board::Board;
use crate::movegen::legal_turns;
use crate::player::Player;

/// Count the number of leaf positions `depth` turns ahead, `player` moving first.
///
/// Depth 0 returns 1 (the current position).
pub fn perft(board: &Board, player: Player, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let turns = legal_turns(board, player);

    if depth == 1 {
        return turns.len() as u64;
    }

    let mut nodes = 0u64;
    for turn in &turns {
        let mut child = *board;
        child.apply_turn(turn);
        nodes += perft(&child, !player, depth - 1);
    }
    nodes
}

/// Run perft with per-turn breakdown (useful for debugging).
///
/// Returns `(turn, node_count)` pairs sorted by turn notation. Depth 0 has no
/// first turn to split by and returns an empty list.
pub fn divide(board: &Board, player: Player, depth: usize) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut results: Vec<(String, u64)> = legal_turns(board, player)
        .iter()
        .map(|turn| {
            let mut child = *board;
            child.apply_turn(turn);
            let count = if depth <= 1 { 1 } else { perft(&child, !player, depth - 1) };
            (turn.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
