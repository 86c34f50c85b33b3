use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app::install_gate::InstallGate;
use crate::app::tool_resolver::ToolResolver;
use crate::domain::{Platform, Settings};
use crate::ports::{Confirmer, Installer, Notifier, ProcessRunner};

const DEFAULT_PROGRESS_INTERVAL: Duration = Duration::from_secs(2);

/// Application context holding dependencies for activation and commands.
pub struct AppContext<P, F, I, N>
where
    P: ProcessRunner,
    F: Confirmer,
    I: Installer,
    N: Notifier,
{
    runner: P,
    confirmer: F,
    installer: I,
    notifier: N,
    settings: Settings,
    storage: PathBuf,
    platform: Platform,
    progress_interval: Duration,
    install_gate: InstallGate,
}

impl<P, F, I, N> AppContext<P, F, I, N>
where
    P: ProcessRunner,
    F: Confirmer,
    I: Installer,
    N: Notifier,
{
    /// Create a new application context for the host platform.
    pub fn new(
        runner: P,
        confirmer: F,
        installer: I,
        notifier: N,
        settings: Settings,
        storage: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runner,
            confirmer,
            installer,
            notifier,
            settings,
            storage: storage.into(),
            platform: Platform::current(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            install_gate: InstallGate::default(),
        }
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Interval between install progress notifications.
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = interval;
        self
    }

    pub fn runner(&self) -> &P {
        &self.runner
    }

    pub fn confirmer(&self) -> &F {
        &self.confirmer
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Extension storage root; the managed environment lives below it.
    pub fn storage(&self) -> &Path {
        &self.storage
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn progress_interval(&self) -> Duration {
        self.progress_interval
    }

    pub fn install_gate(&self) -> &InstallGate {
        &self.install_gate
    }

    pub fn resolver(&self) -> ToolResolver<'_, P> {
        ToolResolver::new(&self.runner, self.platform)
    }
}
