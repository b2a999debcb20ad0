use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn is_maximizing(&self) -> bool {
        *self == Player::Computer
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(*player),
        }
    }
}

/// On-screen symbol. X always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn parse(input: &str) -> Option<Mark> {
        match input.trim().to_ascii_uppercase().as_str() {
            "X" => Some(Mark::X),
            "O" => Some(Mark::O),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Keypad numbering: 1..=9, row-major from the top-left cell.
    pub fn from_keypad(key: usize) -> Option<Move> {
        if !(1..=CELL_COUNT).contains(&key) {
            return None;
        }
        let index = key - 1;
        Some(Move::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn keypad(&self) -> usize {
        self.row * BOARD_SIZE + self.col + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    HumanWon,
    ComputerWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub start: Move,
    pub end: Move,
}

impl WinningLine {
    pub fn new(player: Player, start: Move, end: Move) -> Self {
        Self { player, start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keypad_maps_row_major() {
        assert_eq!(Move::from_keypad(1), Some(Move::new(0, 0)));
        assert_eq!(Move::from_keypad(3), Some(Move::new(0, 2)));
        assert_eq!(Move::from_keypad(4), Some(Move::new(1, 0)));
        assert_eq!(Move::from_keypad(9), Some(Move::new(2, 2)));
        assert_eq!(Move::from_keypad(0), None);
        assert_eq!(Move::from_keypad(10), None);
    }

    #[test]
    fn test_keypad_inverse() {
        for key in 1..=CELL_COUNT {
            let mv = Move::from_keypad(key).unwrap();
            assert_eq!(mv.keypad(), key);
        }
    }

    #[test]
    fn test_mark_parse_is_case_insensitive() {
        assert_eq!(Mark::parse("x"), Some(Mark::X));
        assert_eq!(Mark::parse(" O \n"), Some(Mark::O));
        assert_eq!(Mark::parse("y"), None);
        assert_eq!(Mark::X.other(), Mark::O);
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::Human.opponent(), Player::Computer);
        assert_eq!(Player::Computer.opponent().opponent(), Player::Computer);
        assert!(Player::Computer.is_maximizing());
        assert!(!Player::Human.is_maximizing());
    }
}
