mod config;
mod game_config;
mod pacing_config;

pub use config::{Config, get_config_manager};
pub use game_config::GameConfig;
pub use pacing_config::PacingConfig;
