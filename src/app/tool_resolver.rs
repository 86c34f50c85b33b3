//! Answers "what can I run, and with what interpreter?" without mutating anything.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{
    Availability, BuiltinToolPaths, PYTHON_CANDIDATES, Platform, PythonPaths, Settings, Tool,
    ToolAvailability, venv_paths,
};
use crate::ports::{ProcessRunner, display_command};

pub struct ToolResolver<'a, P: ProcessRunner> {
    runner: &'a P,
    platform: Platform,
}

impl<'a, P: ProcessRunner> ToolResolver<'a, P> {
    pub fn new(runner: &'a P, platform: Platform) -> Self {
        Self { runner, platform }
    }

    /// Configured interpreter if set, otherwise `python3` then `python` from `PATH`.
    ///
    /// Absence is not an error; the caller decides how to react.
    pub fn resolve_python_interpreter(&self, configured: Option<&Path>) -> Option<PythonPaths> {
        if let Some(configured) = configured {
            return match fs::canonicalize(configured) {
                Ok(real) => Some(PythonPaths { env: configured.to_path_buf(), real }),
                Err(err) => {
                    debug!(path = %configured.display(), error = %err, "configured interpreter does not resolve");
                    None
                }
            };
        }

        PYTHON_CANDIDATES.iter().find_map(|candidate| {
            let env = self.runner.which(candidate)?;
            match fs::canonicalize(&env) {
                Ok(real) => Some(PythonPaths { env, real }),
                Err(err) => {
                    debug!(candidate, error = %err, "interpreter on PATH does not resolve");
                    None
                }
            }
        })
    }

    /// `<command> -h` exits successfully.
    pub fn probe_command(&self, command: &str) -> Availability {
        self.probe(Path::new(command), vec!["-h".into()])
    }

    /// `<interpreter> -c "import <module>"` exits successfully.
    pub fn probe_python_module(&self, interpreter: &Path, module: &str) -> Availability {
        self.probe(interpreter, vec!["-c".into(), format!("import {module}").into()])
    }

    /// Path of `tool` inside the managed environment, only if it exists on disk.
    pub fn locate_builtin_tool(&self, storage: &Path, tool: Tool) -> Option<std::path::PathBuf> {
        let path = venv_paths::builtin_tool(storage, tool, self.platform);
        path.is_file().then_some(path)
    }

    pub fn locate_builtin_tools(&self, storage: &Path) -> BuiltinToolPaths {
        let mut paths = BuiltinToolPaths::default();
        for tool in Tool::ALL {
            paths.set(tool, self.locate_builtin_tool(storage, tool));
        }
        paths
    }

    /// Probe the configured tool commands. `ansible-doc` is reported unavailable
    /// without probing when `builtin.probeAnsibleDoc` is off.
    pub fn probe_system_tools(&self, settings: &Settings) -> ToolAvailability {
        let ansible_doc = if settings.builtin.probe_ansible_doc {
            self.probe_command(&settings.ansible_doc.path)
        } else {
            Availability::Unavailable
        };

        ToolAvailability {
            ansible: self.probe_command(&settings.ansible.path),
            ansible_lint: self.probe_command(&settings.ansible_lint.path),
            ansible_doc,
        }
    }

    fn probe(&self, program: &Path, args: Vec<OsString>) -> Availability {
        match self.runner.run(program, &args) {
            Ok(output) => {
                if !output.success {
                    debug!(command = %display_command(program, &args), stderr = %output.stderr.trim(), "probe exited with failure");
                }
                Availability::from_success(output.success)
            }
            Err(err) => {
                debug!(error = %err, "probe could not start");
                Availability::Unavailable
            }
        }
    }
}
