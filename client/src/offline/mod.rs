mod tictactoe_runner;

pub use tictactoe_runner::{GameOutcome, prompt_settings, run_tictactoe_game};
