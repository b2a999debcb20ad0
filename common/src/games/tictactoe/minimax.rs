use super::board::Board;
use super::evaluator::evaluate;
use super::heuristic::estimate;
use super::settings::Difficulty;
use super::types::{Move, Player};
use super::win_detector::is_terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` marks a leaf: the score was read off the board, no move was made.
    pub best_move: Option<Move>,
    pub score: i32,
}

impl SearchResult {
    pub fn leaf(score: i32) -> Self {
        Self {
            best_move: None,
            score,
        }
    }

    fn worst_for(player: Player) -> Self {
        let score = if player.is_maximizing() {
            i32::MIN
        } else {
            i32::MAX
        };
        Self::leaf(score)
    }

    /// Strict comparison, so the first candidate wins ties.
    fn improves_on(&self, best: &SearchResult, player: Player) -> bool {
        if player.is_maximizing() {
            self.score > best.score
        } else {
            self.score < best.score
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,
    pub heuristic_leaves: u64,
}

pub fn search(
    board: &mut Board,
    depth: usize,
    player: Player,
    difficulty: Difficulty,
) -> SearchResult {
    search_with_stats(board, depth, player, difficulty).0
}

/// Minimax from `player`'s turn with `depth` plies of budget.
///
/// The board is used as scratch space: every speculative move is undone
/// before the call returns, so the caller sees it unchanged.
pub fn search_with_stats(
    board: &mut Board,
    depth: usize,
    player: Player,
    difficulty: Difficulty,
) -> (SearchResult, SearchStats) {
    let mut stats = SearchStats {
        nodes: 1,
        heuristic_leaves: 0,
    };

    if depth == 0 || is_terminal(board) {
        return (SearchResult::leaf(evaluate(board)), stats);
    }

    let result = expand(board, depth, player, difficulty.heuristic_cutoff(), &mut stats);
    (result, stats)
}

fn minimax(
    board: &mut Board,
    depth: usize,
    player: Player,
    cutoff: Option<u8>,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;

    if depth == 0 || is_terminal(board) {
        return SearchResult::leaf(evaluate(board));
    }

    match cutoff {
        Some(0) => {
            stats.heuristic_leaves += 1;
            estimate(board, depth, player)
        }
        Some(remaining) => expand(board, depth, player, Some(remaining - 1), stats),
        None => expand(board, depth, player, None, stats),
    }
}

/// Tries every empty cell in row-major order; `child_cutoff` is handed to
/// each child frame as is.
fn expand(
    board: &mut Board,
    depth: usize,
    player: Player,
    child_cutoff: Option<u8>,
    stats: &mut SearchStats,
) -> SearchResult {
    let moves = board.empty_cells();
    if moves.is_empty() {
        return SearchResult::leaf(evaluate(board));
    }

    let mut best = SearchResult::worst_for(player);

    for mv in moves {
        let Some(mut speculation) = board.speculate(mv, player) else {
            continue;
        };
        let child = minimax(&mut speculation, depth - 1, player.opponent(), child_cutoff, stats);
        drop(speculation);

        let candidate = SearchResult {
            best_move: Some(mv),
            score: child.score,
        };
        if candidate.improves_on(&best, player) {
            best = candidate;
        }
    }

    best
}
