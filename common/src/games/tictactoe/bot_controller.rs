use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::log;
use super::board::Board;
use super::game_state::GameState;
use super::minimax::search_with_stats;
use super::settings::Difficulty;
use super::types::{CELL_COUNT, Move, Player};
use super::win_detector::is_terminal;

pub struct BotInput {
    pub board: Board,
    pub difficulty: Difficulty,
    pub random_opening: bool,
}

impl BotInput {
    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            difficulty: state.settings().difficulty,
            random_opening: state.settings().random_opening,
        }
    }
}

/// Picks the computer's next move, or `None` when the game is already
/// decided or the board is full.
pub fn calculate_move<R: Rng + ?Sized>(input: BotInput, rng: &mut R) -> Option<Move> {
    let BotInput {
        mut board,
        difficulty,
        random_opening,
    } = input;

    let available_moves = board.empty_cells();
    if available_moves.is_empty() || is_terminal(&board) {
        return None;
    }

    if random_opening && available_moves.len() == CELL_COUNT {
        let mv = *available_moves.choose(rng)?;
        log!("Bot opened with random cell {}", mv.keypad());
        return Some(mv);
    }

    calculate_minimax_move(&mut board, difficulty)
}

pub fn calculate_minimax_move(board: &mut Board, difficulty: Difficulty) -> Option<Move> {
    let depth = board.empty_count();
    let (result, stats) = search_with_stats(board, depth, Player::Computer, difficulty);

    match result.best_move {
        Some(mv) => {
            log!(
                "Bot ({:?}) picked cell {} with score {} after {} positions ({} estimated)",
                difficulty,
                mv.keypad(),
                result.score,
                stats.nodes,
                stats.heuristic_leaves
            );
            Some(mv)
        }
        None => {
            log!("Bot ({:?}) found no move at depth {}", difficulty, depth);
            None
        }
    }
}
