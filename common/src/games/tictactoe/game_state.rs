use rand::Rng;

use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::settings::GameSettings;
use super::types::{GameStatus, Mark, Move, Player, WinningLine};
use super::win_detector::{winner, winning_line};

#[derive(Debug)]
pub struct GameState {
    board: Board,
    settings: GameSettings,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Move>,
    moves_played: usize,
}

impl GameState {
    pub fn new(settings: GameSettings) -> Self {
        let current_player = if settings.human_mark == Mark::X {
            Player::Human
        } else {
            Player::Computer
        };

        Self {
            board: Board::new(),
            settings,
            current_player,
            status: GameStatus::InProgress,
            last_move: None,
            moves_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }

    pub fn mark_of(&self, player: Player) -> Mark {
        match player {
            Player::Human => self.settings.human_mark,
            Player::Computer => self.settings.human_mark.other(),
        }
    }

    pub fn place_human_mark(&mut self, mv: Move) -> Result<(), String> {
        self.place_mark(Player::Human, mv)
    }

    pub fn play_computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Move, String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }
        if self.current_player != Player::Computer {
            return Err("Not your turn".to_string());
        }

        let mv = calculate_move(BotInput::from_game_state(self), rng)
            .ok_or_else(|| "Bot found no move".to_string())?;
        self.place_mark(Player::Computer, mv)?;
        Ok(mv)
    }

    fn place_mark(&mut self, player: Player, mv: Move) -> Result<(), String> {
        if self.status.is_over() {
            return Err("Game is already over".to_string());
        }

        if player != self.current_player {
            return Err("Not your turn".to_string());
        }

        if !mv.in_bounds() {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.apply_move(mv, player) {
            return Err("Cell is already marked".to_string());
        }

        self.last_move = Some(mv);
        self.moves_played += 1;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }

        Ok(())
    }

    fn check_game_over(&mut self) {
        if let Some(player) = winner(&self.board) {
            self.status = match player {
                Player::Human => GameStatus::HumanWon,
                Player::Computer => GameStatus::ComputerWon,
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from;
    use crate::games::tictactoe::settings::Difficulty;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn human_first(difficulty: Difficulty) -> GameState {
        GameState::new(GameSettings::new(difficulty, Mark::X))
    }

    fn key(k: usize) -> Move {
        Move::from_keypad(k).unwrap()
    }

    #[test]
    fn test_x_moves_first() {
        assert_eq!(human_first(Difficulty::Hard).current_player(), Player::Human);
        let state = GameState::new(GameSettings::new(Difficulty::Hard, Mark::O));
        assert_eq!(state.current_player(), Player::Computer);
        assert_eq!(state.mark_of(Player::Computer), Mark::X);
        assert_eq!(state.mark_of(Player::Human), Mark::O);
    }

    #[test]
    fn test_turns_alternate() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = human_first(Difficulty::Hard);
        assert_eq!(state.place_human_mark(key(5)), Ok(()));
        assert_eq!(state.current_player(), Player::Computer);
        assert_eq!(state.place_human_mark(key(1)), Err("Not your turn".to_string()));

        let mv = state.play_computer_turn(&mut rng).unwrap();
        assert_eq!(state.last_move(), Some(mv));
        assert_eq!(state.current_player(), Player::Human);
        assert_eq!(state.moves_played(), 2);
    }

    #[test]
    fn test_rejects_bad_cells() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = human_first(Difficulty::Easy);
        assert_eq!(
            state.place_human_mark(Move::new(3, 1)),
            Err("Position out of bounds".to_string())
        );
        state.place_human_mark(key(1)).unwrap();
        let computer_move = state.play_computer_turn(&mut rng).unwrap();
        assert_eq!(
            state.place_human_mark(computer_move),
            Err("Cell is already marked".to_string())
        );
        assert_eq!(state.current_player(), Player::Human);
    }

    #[test]
    fn test_computer_punishes_blunders() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = human_first(Difficulty::Hard);
        // The human walks the keypad in order, skipping taken cells.
        for k in [1, 2, 4, 6, 8] {
            if state.status().is_over() {
                break;
            }
            if state.place_human_mark(key(k)).is_err() {
                continue;
            }
            if !state.status().is_over() {
                state.play_computer_turn(&mut rng).unwrap();
            }
        }
        assert_ne!(state.status(), GameStatus::HumanWon);
    }

    #[test]
    fn test_hard_never_loses_to_scripted_human() {
        let mut rng = StdRng::seed_from_u64(9);
        for opening in 1..=9 {
            let mut state = human_first(Difficulty::Hard);
            state.place_human_mark(key(opening)).unwrap();
            while !state.status().is_over() {
                match state.current_player() {
                    Player::Computer => {
                        state.play_computer_turn(&mut rng).unwrap();
                    }
                    Player::Human => {
                        let mv = state.board().empty_cells()[0];
                        state.place_human_mark(mv).unwrap();
                    }
                }
            }
            assert_ne!(state.status(), GameStatus::HumanWon);
            assert!(state.moves_played() <= 9);
        }
    }

    #[test]
    fn test_win_and_draw_detection() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = GameState::new(GameSettings::new(Difficulty::Hard, Mark::O));
        state.play_computer_turn(&mut rng).unwrap();
        state.place_human_mark(key(5)).unwrap();
        state.play_computer_turn(&mut rng).unwrap();
        assert_eq!(state.status(), GameStatus::InProgress);

        let mut full = GameState {
            board: board_from(["CHC", "CHH", "HC."]),
            settings: GameSettings::default(),
            current_player: Player::Computer,
            status: GameStatus::InProgress,
            last_move: None,
            moves_played: 8,
        };
        full.place_mark(Player::Computer, Move::new(2, 2)).unwrap();
        assert_eq!(full.status(), GameStatus::Draw);
        assert_eq!(full.place_human_mark(key(1)), Err("Game is already over".to_string()));
    }

    #[test]
    fn test_game_over_reports_winning_line() {
        let mut state = GameState {
            board: board_from(["CC.", "HH.", "..."]),
            settings: GameSettings::default(),
            current_player: Player::Computer,
            status: GameStatus::InProgress,
            last_move: None,
            moves_played: 4,
        };
        state.place_mark(Player::Computer, Move::new(0, 2)).unwrap();
        assert_eq!(state.status(), GameStatus::ComputerWon);
        let line = state.winning_line().unwrap();
        assert_eq!(line.player, Player::Computer);
        assert_eq!(line.start, Move::new(0, 0));
        assert_eq!(line.end, Move::new(0, 2));
    }
}
