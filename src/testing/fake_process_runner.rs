use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{ProcessOutput, ProcessRunner, display_command};

/// Process runner answering from a table keyed by rendered command line.
///
/// Commands missing from the table behave like a missing binary.
#[derive(Default)]
pub struct FakeProcessRunner {
    outputs: HashMap<String, ProcessOutput>,
    executables: HashMap<String, PathBuf>,
    calls: Mutex<Vec<String>>,
}

impl FakeProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(self, command_line: &str, success: bool) -> Self {
        let output = if success { ProcessOutput::succeeded("") } else { ProcessOutput::failed("") };
        self.with_output(command_line, output)
    }

    pub fn with_output(mut self, command_line: &str, output: ProcessOutput) -> Self {
        self.outputs.insert(command_line.to_string(), output);
        self
    }

    pub fn with_executable(mut self, name: &str, path: &Path) -> Self {
        self.executables.insert(name.to_string(), path.to_path_buf());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Clone for FakeProcessRunner {
    /// Copies the answer tables; the call log starts empty.
    fn clone(&self) -> Self {
        Self {
            outputs: self.outputs.clone(),
            executables: self.executables.clone(),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl ProcessRunner for FakeProcessRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> Result<ProcessOutput, AppError> {
        let command = display_command(program, args);
        self.calls.lock().unwrap().push(command.clone());
        self.outputs.get(&command).cloned().ok_or_else(|| AppError::ProcessSpawn {
            command,
            details: "No such file or directory".to_string(),
        })
    }

    fn which(&self, name: &str) -> Option<PathBuf> {
        self.executables.get(name).cloned()
    }
}
