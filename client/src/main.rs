mod config;
mod console;
mod offline;

use clap::{Parser, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};

use tictactoe_common::tictactoe::{Difficulty, Mark};
use tictactoe_common::{log, logger};

use config::get_config_manager;
use console::Console;
use offline::{GameOutcome, prompt_settings, run_tictactoe_game};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MarkArg {
    X,
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// Config file; defaults to tictactoe_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Your mark. X moves first.
    #[arg(long, value_enum)]
    mark: Option<MarkArg>,

    /// Keep previous turns on screen.
    #[arg(long)]
    no_clear: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_or_create_config()?;

    let prefix = args.use_log_prefix.then(|| "Client".to_string());
    match &config.log_file {
        Some(path) => logger::init_file_logger(prefix, Path::new(path))?,
        None => logger::init_logger(prefix),
    }

    if let Some(difficulty) = args.difficulty {
        config.game.difficulty = Some(difficulty.into());
    }
    if let Some(mark) = args.mark {
        config.game.human_mark = Some(mark.into());
    }
    if args.no_clear {
        config.pacing.clear_screen = false;
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), config.pacing.clear_screen);
    console.clear()?;

    let Some(settings) = prompt_settings(&mut console, &config.game)? else {
        return Ok(());
    };

    let mut rng = rand::rng();
    match run_tictactoe_game(&mut console, settings, &config.pacing, &mut rng)? {
        GameOutcome::Finished(status) => log!("Session finished: {:?}", status),
        GameOutcome::Quit => log!("Session ended by user"),
    }

    Ok(())
}
