use std::cmp::Ordering;

use super::board::Board;
use super::evaluator::evaluate;
use super::minimax::SearchResult;
use super::types::{BOARD_SIZE, Cell, Move, Player};
use super::win_detector::is_terminal;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    pub own: usize,
    pub opponent: usize,
}

/// Sums, over every empty cell, how many of its neighbors belong to `player`
/// and how many to the opponent. Neighbors outside the grid are skipped.
pub fn count_adjacency(board: &Board, player: Player) -> Adjacency {
    let mut totals = Adjacency::default();

    for mv in board.empty_cells() {
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let row = mv.row as isize + dr;
            let col = mv.col as isize + dc;
            if row < 0 || col < 0 || row >= BOARD_SIZE as isize || col >= BOARD_SIZE as isize {
                continue;
            }
            match board.get(Move::new(row as usize, col as usize)) {
                Some(Cell::Taken(owner)) if owner == player => totals.own += 1,
                Some(Cell::Taken(_)) => totals.opponent += 1,
                _ => {}
            }
        }
    }

    totals
}

/// Leaf estimate for a position where bounded search stopped early.
///
/// The score is +1, 0 or -1 depending on whether `player` (the side to move)
/// has more, equal or fewer neighbors around the empty cells than its
/// opponent. It is not flipped to the computer's side.
///
/// The move carried in the result is just the last empty cell scanned.
/// The parent frame always overwrites it; it is never a recommendation.
pub fn estimate(board: &Board, depth: usize, player: Player) -> SearchResult {
    if depth == 0 || is_terminal(board) {
        return SearchResult::leaf(evaluate(board));
    }

    let adjacency = count_adjacency(board, player);
    let score = match adjacency.own.cmp(&adjacency.opponent) {
        Ordering::Greater => 1,
        Ordering::Less => -1,
        Ordering::Equal => 0,
    };

    SearchResult {
        best_move: board.empty_cells().last().copied(),
        score,
    }
}
