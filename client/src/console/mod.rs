mod input;
mod render;

use std::io::{self, BufRead, Write};

pub use input::{InputOutcome, parse_cell, parse_difficulty, parse_mark};
pub use render::{CLEAR_SCREEN, game_over_message, render_board, turn_header};

pub struct Console<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, clear_screen: bool) -> Self {
        Self {
            reader,
            writer,
            clear_screen,
        }
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.writer, "{}", CLEAR_SCREEN)?;
            self.writer.flush()?;
        }
        Ok(())
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    /// `Ok(None)` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Asks until `parse` accepts the answer. `Ok(None)` means the user quit.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        invalid_message: &str,
        parse: impl Fn(Option<&str>) -> InputOutcome<T>,
    ) -> io::Result<Option<T>> {
        loop {
            self.print(prompt)?;
            let line = self.read_line()?;
            match parse(line.as_deref()) {
                InputOutcome::Value(value) => return Ok(Some(value)),
                InputOutcome::Quit => {
                    self.println("\nBye\n")?;
                    return Ok(None);
                }
                InputOutcome::Invalid => self.println(invalid_message)?,
            }
        }
    }
}

#[cfg(test)]
pub(crate) fn scripted(input: &str) -> Console<io::Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(io::Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
}

#[cfg(test)]
pub(crate) fn output_of(console: &Console<io::Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8_lossy(console.writer()).into_owned()
}
