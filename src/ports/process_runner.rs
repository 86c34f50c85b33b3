use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Captured result of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn succeeded(stdout: impl Into<String>) -> Self {
        Self { success: true, stdout: stdout.into(), stderr: String::new() }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self { success: false, stdout: String::new(), stderr: stderr.into() }
    }
}

pub trait ProcessRunner {
    /// Run a program to completion and capture its output.
    ///
    /// A non-zero exit is reported through `ProcessOutput::success`; only a
    /// failure to start the program is an error.
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ProcessOutput, AppError>;

    /// Locate an executable on the search path.
    fn which(&self, name: &str) -> Option<PathBuf>;
}

/// Render a command line for messages and logs.
pub fn display_command(program: &Path, args: &[OsString]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}
