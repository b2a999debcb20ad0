use serde::{Deserialize, Serialize};
use std::time::Duration;
use tictactoe_common::config::Validate;

const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PacingConfig {
    pub turn_delay_ms: u64,
    pub end_delay_ms: u64,
    pub clear_screen: bool,
}

impl PacingConfig {
    pub fn turn_delay(&self) -> Duration {
        Duration::from_millis(self.turn_delay_ms)
    }

    pub fn end_delay(&self) -> Duration {
        Duration::from_millis(self.end_delay_ms)
    }

    #[cfg(test)]
    pub fn instant() -> Self {
        Self {
            turn_delay_ms: 0,
            end_delay_ms: 0,
            clear_screen: false,
        }
    }
}

impl Validate for PacingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.turn_delay_ms > MAX_DELAY_MS {
            return Err(format!("turn_delay_ms must not exceed {}", MAX_DELAY_MS));
        }
        if self.end_delay_ms > MAX_DELAY_MS {
            return Err(format!("end_delay_ms must not exceed {}", MAX_DELAY_MS));
        }
        Ok(())
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            turn_delay_ms: 1000,
            end_delay_ms: 5000,
            clear_screen: true,
        }
    }
}
