use std::fs;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use crate::domain::{AppError, InstallPlan, Platform, Tool};
use crate::ports::Installer;

/// Installer that materializes empty executables in the plan's bin directory.
pub struct FakeInstaller {
    tools: Vec<Tool>,
    fail: bool,
    delay: Duration,
    pub plans: Mutex<Vec<InstallPlan>>,
}

impl FakeInstaller {
    pub fn new() -> Self {
        Self {
            tools: Tool::ALL.to_vec(),
            fail: false,
            delay: Duration::ZERO,
            plans: Mutex::new(Vec::new()),
        }
    }

    /// Succeeds but only materializes `tools`.
    pub fn producing(tools: &[Tool]) -> Self {
        Self { tools: tools.to_vec(), ..Self::new() }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::new() }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn install_count(&self) -> usize {
        self.plans.lock().unwrap().len()
    }
}

impl Installer for FakeInstaller {
    fn install(&self, plan: &InstallPlan) -> Result<(), AppError> {
        self.plans.lock().unwrap().push(plan.clone());
        thread::sleep(self.delay);

        if self.fail {
            return Err(AppError::InstallFailed {
                command: "python3 -m venv".to_string(),
                details: "ensurepip is not available".to_string(),
            });
        }

        let platform = Platform::current();
        fs::create_dir_all(&plan.bin_dir)?;
        fs::write(&plan.venv_python, "")?;
        for tool in &self.tools {
            fs::write(plan.bin_dir.join(platform.executable_name(tool.command_name())), "")?;
        }
        Ok(())
    }
}
