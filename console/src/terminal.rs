//! Line-oriented terminal: the console host's input, output and dialogs.
//!
//! One `Terminal` owns both streams so command input and confirmation
//! answers come from the same reader.

use std::io::{self, BufRead, Write};

use inventory_core::Dialogs;

pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Print `prompt` and read one line. `Ok(None)` on end of input.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

impl<R: BufRead, W: Write> Dialogs for Terminal<R, W> {
    fn alert(&mut self, message: &str) {
        let _ = writeln!(self.output, "! {message}");
    }

    /// Only an explicit `y` or `yes` confirms; end of input declines.
    fn confirm(&mut self, message: &str) -> bool {
        match self.read_line(&format!("{message} [y/N] ")) {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}
