use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::tictactoe::{Difficulty, Mark};

/// Answers to the start-of-game prompts. Missing values are asked for.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub human_mark: Option<Mark>,
    #[serde(default)]
    pub random_opening: bool,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
