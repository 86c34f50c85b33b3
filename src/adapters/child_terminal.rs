use std::ffi::OsString;
use std::path::Path;
use std::process::{Child, Command};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{TerminalHost, display_command};

/// Runs documentation commands as a child process attached to this terminal.
#[derive(Debug, Default)]
pub struct ChildTerminal {
    current: Option<(String, Child)>,
}

impl ChildTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until the current command exits.
    pub fn wait(&mut self) -> Result<(), AppError> {
        if let Some((name, mut child)) = self.current.take() {
            let status = child.wait()?;
            debug!(terminal = %name, %status, "terminal command finished");
        }
        Ok(())
    }
}

impl TerminalHost for ChildTerminal {
    fn open(&mut self, name: &str, program: &Path, args: &[String]) -> Result<(), AppError> {
        let child = Command::new(program).args(args).spawn().map_err(|e| {
            let args: Vec<OsString> = args.iter().map(OsString::from).collect();
            AppError::ProcessSpawn {
                command: display_command(program, &args),
                details: e.to_string(),
            }
        })?;
        self.current = Some((name.to_string(), child));
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), AppError> {
        if let Some((_, mut child)) = self.current.take() {
            if child.try_wait()?.is_none() {
                child.kill()?;
            }
            child.wait()?;
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn dispose_kills_running_command() {
        let mut terminal = ChildTerminal::new();
        terminal.open("doc", Path::new("sleep"), &["30".to_string()]).unwrap();
        assert!(terminal.is_open());

        terminal.dispose().unwrap();

        assert!(!terminal.is_open());
    }

    #[test]
    fn missing_program_fails_to_open() {
        let mut terminal = ChildTerminal::new();

        let err = terminal.open("doc", Path::new("/nonexistent/ansible-doc"), &[]).unwrap_err();

        assert!(matches!(err, AppError::ProcessSpawn { .. }));
        assert!(!terminal.is_open());
    }
}
