use std::path::Path;

use crate::domain::AppError;

/// A single managed terminal for interactive tool output.
pub trait TerminalHost {
    /// Run `program` in a new terminal named `name`.
    fn open(&mut self, name: &str, program: &Path, args: &[String]) -> Result<(), AppError>;

    /// Close the current terminal, if any.
    fn dispose(&mut self) -> Result<(), AppError>;

    fn is_open(&self) -> bool;
}
