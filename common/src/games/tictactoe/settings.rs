use serde::{Deserialize, Serialize};

use super::types::Mark;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Plies searched below the root move before the heuristic stands in for
    /// deeper search. `None` searches to the end of the game.
    pub fn heuristic_cutoff(&self) -> Option<u8> {
        match self {
            Difficulty::Easy => Some(3),
            Difficulty::Medium => Some(5),
            Difficulty::Hard => None,
        }
    }

    /// Numeric level as typed at the difficulty prompt.
    pub fn from_level(level: u32) -> Option<Difficulty> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn level(&self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSettings {
    pub difficulty: Difficulty,
    pub human_mark: Mark,
    pub random_opening: bool,
}

impl GameSettings {
    pub fn new(difficulty: Difficulty, human_mark: Mark) -> Self {
        Self {
            difficulty,
            human_mark,
            random_opening: false,
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::new(Difficulty::Hard, Mark::X)
    }
}
