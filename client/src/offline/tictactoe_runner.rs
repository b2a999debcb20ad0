use rand::Rng;
use std::io::{self, BufRead, Write};
use std::thread;

use tictactoe_common::log;
use tictactoe_common::tictactoe::{GameSettings, GameState, GameStatus, Player};

use crate::config::{GameConfig, PacingConfig};
use crate::console::{
    Console, game_over_message, parse_cell, parse_difficulty, parse_mark, render_board, turn_header,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Finished(GameStatus),
    Quit,
}

/// Fills in whatever the config leaves open by asking. `Ok(None)` if the
/// user quit at a prompt.
pub fn prompt_settings<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game_config: &GameConfig,
) -> io::Result<Option<GameSettings>> {
    let human_mark = match game_config.human_mark {
        Some(mark) => mark,
        None => match console.ask("\nChoose X or O: ", "Bad choice", parse_mark)? {
            Some(mark) => mark,
            None => return Ok(None),
        },
    };

    console.clear()?;

    let difficulty = match game_config.difficulty {
        Some(difficulty) => difficulty,
        None => {
            match console.ask(
                "\nChoose difficulty (1,2,3): ",
                "Bad choice",
                parse_difficulty,
            )? {
                Some(difficulty) => difficulty,
                None => return Ok(None),
            }
        }
    };

    Ok(Some(GameSettings {
        difficulty,
        human_mark,
        random_opening: game_config.random_opening,
    }))
}

fn show_turn<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    state: &GameState,
    player: Option<Player>,
) -> io::Result<()> {
    let human_mark = state.settings().human_mark;
    console.clear()?;
    if let Some(player) = player {
        console.println(&turn_header(player, human_mark))?;
    }
    console.print(&render_board(state.board(), human_mark))
}

pub fn run_tictactoe_game<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    settings: GameSettings,
    pacing: &PacingConfig,
    rng: &mut G,
) -> io::Result<GameOutcome> {
    let mut state = GameState::new(settings);
    log!(
        "Game started: human plays {}, difficulty {:?}",
        settings.human_mark.symbol(),
        settings.difficulty
    );

    while !state.status().is_over() {
        let player = state.current_player();
        show_turn(console, &state, Some(player))?;

        match player {
            Player::Human => loop {
                let Some(mv) = console.ask("Choose cell (1..9): ", "Bad choice!", parse_cell)?
                else {
                    log!("Human quit after {} moves", state.moves_played());
                    return Ok(GameOutcome::Quit);
                };
                match state.place_human_mark(mv) {
                    Ok(()) => {
                        log!("Human took cell {}", mv.keypad());
                        break;
                    }
                    Err(e) => {
                        log!("Rejected human move {}: {}", mv.keypad(), e);
                        console.println("Bad move!")?;
                    }
                }
            },
            Player::Computer => {
                state.play_computer_turn(rng).map_err(io::Error::other)?;
                thread::sleep(pacing.turn_delay());
            }
        }
    }

    let status = state.status();
    let header = match status {
        GameStatus::HumanWon => Some(Player::Human),
        GameStatus::ComputerWon => Some(Player::Computer),
        _ => None,
    };
    show_turn(console, &state, header)?;
    if let Some(message) = game_over_message(status) {
        console.println(message)?;
    }
    if let Some(line) = state.winning_line() {
        log!(
            "Game over: {:?} from cell {} to cell {}",
            status,
            line.start.keypad(),
            line.end.keypad()
        );
    } else {
        log!("Game over: {:?}", status);
    }

    thread::sleep(pacing.end_delay());
    Ok(GameOutcome::Finished(status))
}
