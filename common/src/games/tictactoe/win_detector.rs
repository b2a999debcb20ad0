use super::board::Board;
use super::types::{Cell, Move, Player, WinningLine};

const LINES: [[(usize, usize); 3]; 8] = [
    // rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

fn line_owned_by(board: &Board, line: &[(usize, usize); 3], player: Player) -> bool {
    line.iter()
        .all(|&(row, col)| board.get(Move::new(row, col)) == Some(Cell::Taken(player)))
}

pub fn wins(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| line_owned_by(board, line, player))
}

/// True only when someone has three in a line. A full board without a
/// winner is not terminal; combine with `is_draw` for that.
pub fn is_terminal(board: &Board) -> bool {
    wins(board, Player::Human) || wins(board, Player::Computer)
}

pub fn is_draw(board: &Board) -> bool {
    board.empty_cells().is_empty() && !is_terminal(board)
}

pub fn winner(board: &Board) -> Option<Player> {
    [Player::Computer, Player::Human]
        .into_iter()
        .find(|&player| wins(board, player))
}

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for line in &LINES {
        for player in [Player::Computer, Player::Human] {
            if line_owned_by(board, line, player) {
                let (start_row, start_col) = line[0];
                let (end_row, end_col) = line[2];
                return Some(WinningLine::new(
                    player,
                    Move::new(start_row, start_col),
                    Move::new(end_row, end_col),
                ));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    #[test]
    fn test_rows_columns_and_diagonals_win() {
        assert!(wins(&board_from(["CCC", "H.H", "..."]), Player::Computer));
        assert!(wins(&board_from(["H.C", "H.C", "H.."]), Player::Human));
        assert!(wins(&board_from(["C.H", ".CH", "..C"]), Player::Computer));
        assert!(wins(&board_from(["C.H", ".HC", "H.."]), Player::Human));
    }

    #[test]
    fn test_partial_line_does_not_win() {
        let board = board_from(["CC.", "HH.", "..."]);
        assert!(!wins(&board, Player::Computer));
        assert!(!wins(&board, Player::Human));
        assert!(!is_terminal(&board));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_without_winner_is_draw_not_terminal() {
        let board = board_from(["CHC", "CHH", "HCC"]);
        assert!(!is_terminal(&board));
        assert!(board.empty_cells().is_empty());
        assert!(is_draw(&board));
    }

    #[test]
    fn test_winning_line_reports_endpoints() {
        let board = board_from(["H.C", ".C.", "C.H"]);
        let line = winning_line(&board).unwrap();
        assert_eq!(line.player, Player::Computer);
        assert_eq!(line.start, Move::new(2, 0));
        assert_eq!(line.end, Move::new(0, 2));
    }

    #[test]
    fn test_random_playouts_never_have_two_winners() {
        let mut rng = StdRng::seed_from_u64(42);
        for game in 0..2000 {
            let mut board = Board::new();
            let mut player = if game % 2 == 0 { Player::Human } else { Player::Computer };
            while !is_terminal(&board) {
                let moves = board.empty_cells();
                let Some(&mv) = moves.choose(&mut rng) else {
                    break;
                };
                assert!(board.apply_move(mv, player));
                player = player.opponent();
            }
            assert!(!(wins(&board, Player::Human) && wins(&board, Player::Computer)));
        }
    }
}
