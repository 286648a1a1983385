//! Plain line-based front end
//!
//! Reads one token per line and prints notices as text. Works over any
//! reader/writer pair so sessions can be scripted.

use crate::game::{Notice, PlayerInterface};
use crate::Result;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> PlayerInterface for Console<R, W> {
    fn next_command(&mut self) -> Result<Option<String>> {
        self.prompt("Your choice: ")
    }

    fn ask_suspect(&mut self, suspects: &[&str]) -> Result<Option<String>> {
        writeln!(self.output)?;
        writeln!(self.output, "Suspects: {}", suspects.join(", "))?;
        self.prompt("Who do you accuse? ")
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        if matches!(notice, Notice::Arrived { .. }) {
            writeln!(self.output)?;
            writeln!(self.output, "----------------------------------")?;
        }
        for line in notice.lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}
