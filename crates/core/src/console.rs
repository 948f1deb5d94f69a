//! Contract for every interaction with the operator.

use crate::error::Result;

pub trait UserConsole {
    /// Writes `message` without a line break.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn write(&mut self, message: &str) -> Result<()>;

    /// Reads one line of input without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read.
    fn read_line(&mut self) -> Result<String>;

    /// Asks a yes/no question; only `Y` (any case) counts as yes.
    ///
    /// # Errors
    ///
    /// Returns an error if the console cannot be written or read.
    fn read_yes_no(&mut self, message: &str) -> Result<bool> {
        self.write(message)?;
        self.write(" ")?;
        Ok(self.read_line()?.trim().eq_ignore_ascii_case("Y"))
    }

    /// Blocks until the operator presses a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    fn wait_any_key(&mut self, message: Option<&str>) -> Result<()>;
}
