//! Line-oriented console capability.
//!
//! The session driver and players talk to a [`Console`] rather than a
//! terminal directly, so tests can substitute a scripted input source.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A line-oriented prompt/response channel.
pub trait Console {
    /// Writes a line of output.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Reads one line of input, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`io::ErrorKind::UnexpectedEof`] when the input channel is
    /// closed. This is the only hard error in the input path; invalid
    /// content is handled by the caller re-prompting.
    fn read_line(&mut self) -> io::Result<String>;

    /// Clears the screen, where the backing terminal supports it.
    fn clear(&mut self) -> io::Result<()>;
}

/// Console backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    fn clear(&mut self) -> io::Result<()> {
        crossterm::execute!(
            io::stdout(),
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
            crossterm::cursor::MoveTo(0, 0)
        )
    }
}

/// Console fed by a fixed script, for driving sessions in tests.
///
/// Output lines are collected instead of printed; `clear` only counts.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    lines: Vec<String>,
    clears: usize,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `inputs` in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            lines: Vec::new(),
            clears: 0,
        }
    }

    /// Everything printed so far, one entry per `print` call.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if any printed entry contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Number of clear-screen calls.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.inputs
            .pop_front()
            .map(|line| line.trim().to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
