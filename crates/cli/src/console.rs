//! Terminal implementation of [`UserConsole`].

use std::io::{self, stdin, stdout, BufRead, StdinLock, Stdout, Write};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use variable_group_copier_core::console::UserConsole;
use variable_group_copier_core::error::{Error, Result};

const DEFAULT_EXIT_MESSAGE: &str = "Press any key to exit.";

/// Console reading lines from `input` and writing prompts to `output`.
pub struct TerminalConsole<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl TerminalConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> UserConsole for TerminalConsole<R, W> {
    fn write(&mut self, message: &str) -> Result<()> {
        self.output.write_all(message.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        let mut input = String::new();

        if self.input.read_line(&mut input)? == 0 {
            return Err(Error::Stdio(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            )));
        }

        Ok(input.trim_end_matches(['\r', '\n']).to_string())
    }

    fn wait_any_key(&mut self, message: Option<&str>) -> Result<()> {
        let message = message.unwrap_or(DEFAULT_EXIT_MESSAGE);
        self.write(&format!("{message}\n"))?;

        enable_raw_mode()?;
        let pressed = wait_for_key_press();
        disable_raw_mode()?;

        Ok(pressed?)
    }
}

fn wait_for_key_press() -> io::Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
