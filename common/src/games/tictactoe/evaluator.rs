use super::board::Board;
use super::types::Player;
use super::win_detector::wins;

pub const COMPUTER_WIN: i32 = 1;
pub const HUMAN_WIN: i32 = -1;
pub const NEUTRAL: i32 = 0;

/// Score from the computer's side. Non-terminal boards score as neutral,
/// so callers only use this at a real leaf.
pub fn evaluate(board: &Board) -> i32 {
    if wins(board, Player::Computer) {
        COMPUTER_WIN
    } else if wins(board, Player::Human) {
        HUMAN_WIN
    } else {
        NEUTRAL
    }
}
