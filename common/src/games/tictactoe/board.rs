use std::ops::{Deref, DerefMut};

use super::types::{BOARD_SIZE, Cell, Move, Player};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row).and_then(|row| row.get(mv.col)).copied()
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Row-major scan; search iterates moves in this order.
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Move::new(row, col));
                }
            }
        }
        moves
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.get(mv) == Some(Cell::Empty)
    }

    pub fn apply_move(&mut self, mv: Move, player: Player) -> bool {
        if !self.is_valid_move(mv) {
            return false;
        }
        self.cells[mv.row][mv.col] = Cell::Taken(player);
        true
    }

    fn clear(&mut self, mv: Move) {
        self.cells[mv.row][mv.col] = Cell::Empty;
    }

    /// Places `player` at `mv` for the lifetime of the returned guard.
    /// The cell is emptied again when the guard drops, on every exit path.
    /// Returns `None` if the move is not valid.
    pub fn speculate(&mut self, mv: Move, player: Player) -> Option<Speculation<'_>> {
        if self.apply_move(mv, player) {
            Some(Speculation { board: self, mv })
        } else {
            None
        }
    }
}

pub struct Speculation<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        self.board.clear(self.mv);
    }
}

#[cfg(test)]
pub(crate) fn board_from(rows: [&str; BOARD_SIZE]) -> Board {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().take(BOARD_SIZE).enumerate() {
            cells[row][col] = match ch {
                'C' => Cell::Taken(Player::Computer),
                'H' => Cell::Taken(Player::Human),
                _ => Cell::Empty,
            };
        }
    }
    Board::from_rows(cells)
}
