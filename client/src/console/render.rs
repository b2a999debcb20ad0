use tictactoe_common::tictactoe::{Board, Cell, GameStatus, Mark, Player};

const SEPARATOR: &str = "---------------";
pub const CLEAR_SCREEN: &str = "\x1B[2J\x1B[1;1H";

fn symbol(cell: Cell, human_mark: Mark) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Taken(Player::Human) => human_mark.symbol(),
        Cell::Taken(Player::Computer) => human_mark.other().symbol(),
    }
}

pub fn render_board(board: &Board, human_mark: Mark) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(SEPARATOR);
    out.push('\n');
    for row in board.rows() {
        for &cell in row {
            out.push_str(&format!("| {} |", symbol(cell, human_mark)));
        }
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

pub fn turn_header(player: Player, human_mark: Mark) -> String {
    match player {
        Player::Human => format!("Human turn [{}]", human_mark.symbol()),
        Player::Computer => format!("Computer turn [{}]", human_mark.other().symbol()),
    }
}

pub fn game_over_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::HumanWon => Some("YOU WIN!"),
        GameStatus::ComputerWon => Some("YOU LOSE!"),
        GameStatus::Draw => Some("DRAW!"),
        GameStatus::InProgress => None,
    }
}
