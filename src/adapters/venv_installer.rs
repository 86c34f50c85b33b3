//! Provisions the managed virtual environment with `python -m venv` and pip.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::domain::{AppError, InstallPlan};
use crate::ports::{Installer, ProcessRunner, display_command};

pub struct VenvInstaller<P: ProcessRunner> {
    runner: P,
}

impl<P: ProcessRunner> VenvInstaller<P> {
    pub fn new(runner: P) -> Self {
        Self { runner }
    }

    fn step(&self, program: &Path, args: &[OsString]) -> Result<(), AppError> {
        let command = display_command(program, args);
        debug!(%command, "install step");
        let output = self.runner.run(program, args)?;
        if !output.success {
            let stderr = output.stderr.trim();
            let details =
                if stderr.is_empty() { "Unknown error".to_string() } else { stderr.to_string() };
            return Err(AppError::InstallFailed { command, details });
        }
        Ok(())
    }
}

impl<P: ProcessRunner> Installer for VenvInstaller<P> {
    /// Replace any previous environment, then install the pinned packages.
    fn install(&self, plan: &InstallPlan) -> Result<(), AppError> {
        if plan.venv_dir.exists() {
            info!(path = %plan.venv_dir.display(), "removing previous environment");
            fs::remove_dir_all(&plan.venv_dir)?;
        }

        self.step(&plan.interpreter, &plan.create_venv_args())?;
        self.step(&plan.venv_python, &plan.pip_install_args())
    }
}
