mod board;
mod bot_controller;
mod evaluator;
mod game_state;
mod heuristic;
mod minimax;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, Speculation};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use evaluator::{COMPUTER_WIN, HUMAN_WIN, NEUTRAL, evaluate};
pub use game_state::GameState;
pub use heuristic::{Adjacency, count_adjacency, estimate};
pub use minimax::{SearchResult, SearchStats, search, search_with_stats};
pub use settings::{Difficulty, GameSettings};
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, GameStatus, Mark, Move, Player, WinningLine};
pub use win_detector::{is_draw, is_terminal, winner, winning_line, wins};
