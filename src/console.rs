use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error::{Error, Result};

/// Line-oriented prompt/answer channel.
///
/// The binary wires it to stdin/stdout; tests feed a `Cursor` and read back a
/// `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `[>] label: ` and read one trimmed line.
    ///
    /// Returns [`Error::InputClosed`] when the input is exhausted.
    pub fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "[>] {label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask a yes/no question. Only `y` (any case) confirms.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{question} (y/n)"))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
