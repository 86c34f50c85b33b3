use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::TerminalHost;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedTerminal {
    pub name: String,
    pub program: PathBuf,
    pub args: Vec<String>,
}

#[derive(Default)]
pub struct FakeTerminal {
    current: Option<OpenedTerminal>,
    pub opened: Vec<OpenedTerminal>,
    pub disposed: usize,
}

impl FakeTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&OpenedTerminal> {
        self.current.as_ref()
    }
}

impl TerminalHost for FakeTerminal {
    fn open(&mut self, name: &str, program: &Path, args: &[String]) -> Result<(), AppError> {
        let terminal = OpenedTerminal {
            name: name.to_string(),
            program: program.to_path_buf(),
            args: args.to_vec(),
        };
        self.opened.push(terminal.clone());
        self.current = Some(terminal);
        Ok(())
    }

    fn dispose(&mut self) -> Result<(), AppError> {
        if self.current.take().is_some() {
            self.disposed += 1;
        }
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
