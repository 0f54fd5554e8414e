//! Line-oriented operator IO over any reader/writer pair

use std::fmt::Display;
use std::io::{self, BufRead, Write};

/// Asks questions on `output` and reads one-line answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one line.
    ///
    /// Returns `None` once input is exhausted. The trailing newline is stripped;
    /// other whitespace is left for the caller's validation.
    pub fn ask(&mut self, question: impl Display) -> io::Result<Option<String>> {
        writeln!(self.output, "\n{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(|c: char| c == '\r' || c == '\n').to_string()))
    }

    /// Print a line of output.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_reads_lines_then_eof() {
        let mut prompter = Prompter::new(Cursor::new("first\r\n second \n"), Vec::new());
        assert_eq!(prompter.ask("q1").unwrap().as_deref(), Some("first"));
        assert_eq!(prompter.ask("q2").unwrap().as_deref(), Some(" second "));
        assert_eq!(prompter.ask("q3").unwrap(), None);

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "\nq1\n\nq2\n\nq3\n");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut prompter = Prompter::new(Cursor::new("yes"), Vec::new());
        assert_eq!(prompter.ask("?").unwrap().as_deref(), Some("yes"));
    }
}
