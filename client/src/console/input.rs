use tictactoe_common::tictactoe::{Difficulty, Mark, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome<T> {
    Value(T),
    Invalid,
    /// End of input or an explicit quit command.
    Quit,
}

impl<T> InputOutcome<T> {
    fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => InputOutcome::Value(value),
            None => InputOutcome::Invalid,
        }
    }
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

/// `None` stands for end of input.
pub fn parse_line<T>(line: Option<&str>, parse: impl FnOnce(&str) -> Option<T>) -> InputOutcome<T> {
    match line {
        None => InputOutcome::Quit,
        Some(line) if is_quit(line) => InputOutcome::Quit,
        Some(line) => InputOutcome::from_option(parse(line.trim())),
    }
}

pub fn parse_mark(line: Option<&str>) -> InputOutcome<Mark> {
    parse_line(line, Mark::parse)
}

pub fn parse_difficulty(line: Option<&str>) -> InputOutcome<Difficulty> {
    parse_line(line, |text| text.parse::<u32>().ok().and_then(Difficulty::from_level))
}

/// Keypad cell 1..=9. Whether the cell is free is checked by the game.
pub fn parse_cell(line: Option<&str>) -> InputOutcome<Move> {
    parse_line(line, |text| text.parse::<usize>().ok().and_then(Move::from_keypad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell(Some("5\n")), InputOutcome::Value(Move::new(1, 1)));
        assert_eq!(parse_cell(Some(" 9 ")), InputOutcome::Value(Move::new(2, 2)));
        assert_eq!(parse_cell(Some("0")), InputOutcome::Invalid);
        assert_eq!(parse_cell(Some("10")), InputOutcome::Invalid);
        assert_eq!(parse_cell(Some("five")), InputOutcome::Invalid);
        assert_eq!(parse_cell(Some("")), InputOutcome::Invalid);
    }

    #[test]
    fn test_quit_and_end_of_input() {
        assert_eq!(parse_cell(None), InputOutcome::Quit);
        assert_eq!(parse_cell(Some("q\n")), InputOutcome::Quit);
        assert_eq!(parse_mark(Some("QUIT")), InputOutcome::Quit);
        assert_eq!(parse_difficulty(Some("exit")), InputOutcome::Quit);
    }

    #[test]
    fn test_parse_mark() {
        assert_eq!(parse_mark(Some("x\n")), InputOutcome::Value(Mark::X));
        assert_eq!(parse_mark(Some("O")), InputOutcome::Value(Mark::O));
        assert_eq!(parse_mark(Some("Z")), InputOutcome::Invalid);
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(parse_difficulty(Some("1")), InputOutcome::Value(Difficulty::Easy));
        assert_eq!(parse_difficulty(Some("3\n")), InputOutcome::Value(Difficulty::Hard));
        assert_eq!(parse_difficulty(Some("4")), InputOutcome::Invalid);
        assert_eq!(parse_difficulty(Some("-1")), InputOutcome::Invalid);
    }
}
